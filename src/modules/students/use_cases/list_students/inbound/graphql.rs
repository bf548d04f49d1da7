use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::students::adapters::outbound::repository::StudentOrder;
use crate::modules::students::core::student::Student;
use crate::modules::students::use_cases::list_students::handler::{self, StudentQuery};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStudent {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub qr_code: Option<String>,
    /// Text to render into the student's QR code.
    pub qr_payload: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Student> for GqlStudent {
    fn from(s: Student) -> Self {
        let qr_payload = s.qr_payload().encode();
        Self {
            id: s.id,
            student_id: s.student_id,
            name: s.name,
            email: s.email,
            qr_code: s.qr_code,
            qr_payload,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Default)]
pub struct StudentsQuery;

#[Object]
impl StudentsQuery {
    async fn students(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        order_by_name: Option<bool>,
    ) -> GqlResult<Vec<GqlStudent>> {
        let state = context.data_unchecked::<AppState>();
        let order = if order_by_name.unwrap_or(false) {
            StudentOrder::NameAscending
        } else {
            StudentOrder::NewestFirst
        };
        let list = handler::list(state.students.as_ref(), &StudentQuery { search, order }).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn student(&self, context: &Context<'_>, id: String) -> GqlResult<GqlStudent> {
        let state = context.data_unchecked::<AppState>();
        Ok(handler::get(state.students.as_ref(), &id).await?.into())
    }
}
