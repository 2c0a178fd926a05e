use crate::db::postgres_service::PostgresService;
use crate::graphql::types::company::{CreateCompanyInput, UpdateCompanyInput};
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::company::{ActiveModel as CompanyActive, Entity as Company, Model as CompanyModel};
use sea_orm::{
    ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_company(&self, input: CreateCompanyInput) -> Result<CompanyModel, AppError> {
        let now = Utc::now();
        Ok(CompanyActive {
            id: Set(new_id()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_company(&self, id: Uuid) -> Result<CompanyModel, AppError> {
        Ok(Company::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Company not found".into()))?)
    }

    pub async fn list_companies(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CompanyModel>, u64), AppError> {
        let finder = Company::find().order_by_desc(entity::company::Column::CreatedAt);
        let total = finder.clone().count(&self.db).await?;
        let items = finder
            .paginate(&self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;
        Ok((items, total))
    }

    pub async fn update_company(
        &self,
        id: Uuid,
        input: UpdateCompanyInput,
    ) -> Result<CompanyModel, AppError> {
        let mut am: CompanyActive = self.get_company(id).await?.into();
        if let Some(name) = input.name {
            am.name = Set(name);
        }
        if let Some(email) = input.email {
            am.email = Set(email);
        }
        if let Some(phone) = input.phone {
            am.phone = Set(Some(phone));
        }
        if let Some(address) = input.address {
            am.address = Set(Some(address));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_company(&self, id: Uuid) -> Result<bool, AppError> {
        let res = Company::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Company not found".into()));
        }
        Ok(true)
    }
}
