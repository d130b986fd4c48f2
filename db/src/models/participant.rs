use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub age: i32,
    pub phone: String,
    pub course_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        age: i32,
        phone: &str,
        course_id: i64,
    ) -> Result<Model, DbErr> {
        let participant = ActiveModel {
            name: Set(name.to_owned()),
            age: Set(age),
            phone: Set(phone.to_owned()),
            course_id: Set(course_id),
            ..Default::default()
        };

        participant.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    /// Overwrites every mutable field of the participant, including the
    /// course assignment.
    pub async fn update(
        db: &DbConn,
        id: i64,
        name: &str,
        age: i32,
        phone: &str,
        course_id: i64,
    ) -> Result<Model, DbErr> {
        let participant = ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            age: Set(age),
            phone: Set(phone.to_owned()),
            course_id: Set(course_id),
        };

        participant.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
