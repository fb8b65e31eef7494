use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::MovieRequest,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: MovieRequest) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(req.title),
            year: Set(req.year),
            watched: Set(req.watched),
        };
        Ok(model.insert(&self.db).await?)
    }

    // No ORDER BY: rows come back in the engine's natural order.
    pub async fn list(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    pub async fn update(&self, id: i32, req: MovieRequest) -> AppResult<()> {
        let result = movie::Entity::update_many()
            .set(movie::ActiveModel {
                id: NotSet,
                title: Set(req.title),
                year: Set(req.year),
                watched: Set(req.watched),
            })
            .filter(movie::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        // A single conditional statement; zero affected rows means the id
        // never existed.
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
