//! Server-rendered HTML views.
//!
//! Every page shares one small layout; list pages embed the forms that post
//! back to the mutation endpoints. Pages are plain `format!`-built markup
//! returned as `Html<String>`.

use axum::response::Html;
use db::models::{course, participant};

/// Escapes text interpolated into markup.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <nav><a href=\"/minicursos\">Minicursos</a> | \
         <a href=\"/participantes\">Participantes</a></nav>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    ))
}

/// Generic error page: a human-readable message and a way back.
pub fn error_page(message: &str) -> Html<String> {
    let body = format!(
        "<h1>Erro</h1>\n<p>{}</p>\n<p><a href=\"/minicursos\">Voltar</a></p>",
        escape(message)
    );
    layout("Erro", &body)
}

/// Course listing with the add-course form and per-row delete buttons.
pub fn courses_page(courses: &[course::Model]) -> Html<String> {
    let mut rows = String::new();
    for course in courses {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{title}</td>\
             <td><form method=\"post\" action=\"/remover_minicurso/{id}\">\
             <button type=\"submit\">Remover</button></form></td></tr>\n",
            id = course.id,
            title = escape(&course.title),
        ));
    }

    let body = format!(
        "<h1>Minicursos</h1>\n\
         <table>\n\
         <tr><th>ID</th><th>Título</th><th></th></tr>\n\
         {rows}\
         </table>\n\
         <h2>Adicionar minicurso</h2>\n\
         <form method=\"post\" action=\"/adicionar_minicurso\">\n\
         <label>Título: <input name=\"title\"></label>\n\
         <button type=\"submit\">Adicionar</button>\n\
         </form>",
    );
    layout("Minicursos", &body)
}

/// Participant listing plus the add and update forms. Courses are needed to
/// show each participant's course title and to populate the selectors.
pub fn participants_page(
    participants: &[participant::Model],
    courses: &[course::Model],
) -> Html<String> {
    let course_title = |id: i64| {
        courses
            .iter()
            .find(|c| c.id == id)
            .map(|c| escape(&c.title))
            .unwrap_or_else(|| format!("#{id}"))
    };

    let mut rows = String::new();
    for p in participants {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{age}</td><td>{phone}</td>\
             <td>{course}</td>\
             <td><form method=\"post\" action=\"/remover_participante/{id}\">\
             <button type=\"submit\">Remover</button></form></td></tr>\n",
            id = p.id,
            name = escape(&p.name),
            age = p.age,
            phone = escape(&p.phone),
            course = course_title(p.course_id),
        ));
    }

    let mut options = String::new();
    for course in courses {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            course.id,
            escape(&course.title),
        ));
    }

    let body = format!(
        "<h1>Participantes</h1>\n\
         <table>\n\
         <tr><th>ID</th><th>Nome</th><th>Idade</th><th>Telefone</th>\
         <th>Minicurso</th><th></th></tr>\n\
         {rows}\
         </table>\n\
         <h2>Adicionar participante</h2>\n\
         <form method=\"post\" action=\"/adicionar_participante\">\n\
         <label>Nome: <input name=\"name\"></label>\n\
         <label>Idade: <input name=\"age\"></label>\n\
         <label>Telefone: <input name=\"phone\"></label>\n\
         <label>Minicurso: <select name=\"minicurso_id\">{options}</select></label>\n\
         <button type=\"submit\">Adicionar</button>\n\
         </form>\n\
         <h2>Alterar participante</h2>\n\
         <form method=\"post\" action=\"/alterar_participante\">\n\
         <label>ID: <input name=\"participant_id\"></label>\n\
         <label>Nome: <input name=\"name\"></label>\n\
         <label>Idade: <input name=\"age\"></label>\n\
         <label>Telefone: <input name=\"phone\"></label>\n\
         <label>Minicurso: <select name=\"minicurso_id\">{options}</select></label>\n\
         <button type=\"submit\">Alterar</button>\n\
         </form>",
    );
    layout("Participantes", &body)
}
