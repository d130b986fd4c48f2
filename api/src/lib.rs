pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;

#[cfg(test)]
mod tests;
