use crate::graphql::types::company::{Company, CreateCompanyInput, UpdateCompanyInput};
use crate::graphql::{db, require_capability};
use crate::utils::validate::FieldErrors;
use async_graphql::{Context, Object, Result};
use uuid::Uuid;

#[derive(Default)]
pub struct CompanyMutation;

#[Object]
impl CompanyMutation {
    async fn create_company(
        &self,
        ctx: &Context<'_>,
        input: CreateCompanyInput,
    ) -> Result<Company> {
        require_capability(ctx, |p| p.can_manage_companies)?;
        let mut errs = FieldErrors::new();
        errs.require_filled("name", &input.name);
        errs.require_email("email", &input.email);
        errs.finish("Invalid company input")?;
        Ok(db(ctx).create_company(input).await?.into())
    }

    async fn update_company(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateCompanyInput,
    ) -> Result<Company> {
        require_capability(ctx, |p| p.can_manage_companies)?;
        let mut errs = FieldErrors::new();
        if let Some(name) = &input.name {
            errs.require_filled("name", name);
        }
        if let Some(email) = &input.email {
            errs.require_email("email", email);
        }
        errs.finish("Invalid company input")?;
        Ok(db(ctx).update_company(id, input).await?.into())
    }

    async fn delete_company(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        require_capability(ctx, |p| p.can_manage_companies)?;
        Ok(db(ctx).delete_company(id).await?)
    }
}
