use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::participant::Entity")]
    Participant,
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, title: &str) -> Result<Model, DbErr> {
        let course = ActiveModel {
            title: Set(title.to_owned()),
            ..Default::default()
        };

        course.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    /// Looks a course up by exact title (case-sensitive equality).
    pub async fn find_by_title(db: &DbConn, title: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Title.eq(title))
            .one(db)
            .await
    }

    /// Deletes the course and every participant registered to it.
    ///
    /// Cascade is two explicit statements inside one transaction rather than a
    /// store-level constraint. Deleting an absent course is a no-op.
    pub async fn delete_cascade(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        if Entity::find_by_id(id).one(&txn).await?.is_some() {
            let removed = super::participant::Entity::delete_many()
                .filter(super::participant::Column::CourseId.eq(id))
                .exec(&txn)
                .await?;
            Entity::delete_by_id(id).exec(&txn).await?;
            tracing::debug!(
                course_id = id,
                participants = removed.rows_affected,
                "cascade delete"
            );
        }

        txn.commit().await?;
        Ok(())
    }
}
