//! Donor statistics handler.

use actix_web::{get, web};

use crate::domain::DonorStats;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DonorStatsSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Total donors and a count for each blood type.
///
/// The counts are separate reads, so a write landing mid-request can leave
/// them inconsistent with the total.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Donor counts", body = DonorStatsSchema),
        (status = 500, description = "Donor store failure", body = ErrorSchema),
    ),
    tags = ["donors"],
    operation_id = "donorStats"
)]
#[get("/stats")]
pub async fn donor_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<DonorStats>> {
    state.donors_query.donor_stats().await.map(web::Json)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use donor_schema::BloodType;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{MockDonorCommand, MockDonorQuery};

    async fn get_stats(query: MockDonorQuery) -> (StatusCode, Value) {
        let state = HttpState::new(Arc::new(MockDonorCommand::new()), Arc::new(query));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(donor_stats)),
        )
        .await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/stats").to_request(),
        )
        .await;
        (res.status(), actix_test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn reports_every_blood_type() {
        let mut query = MockDonorQuery::new();
        query
            .expect_donor_stats()
            .times(1)
            .return_once(|| Ok(DonorStats::new(2, [(BloodType::BNegative, 2)])));

        let (status, body) = get_stats(query).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total": 2,
                "bloodTypes": {
                    "A+": 0, "A-": 0, "B+": 0, "B-": 2,
                    "AB+": 0, "AB-": 0, "O+": 0, "O-": 0
                }
            })
        );
    }

    #[actix_web::test]
    async fn store_failures_are_500_with_message() {
        let mut query = MockDonorQuery::new();
        query
            .expect_donor_stats()
            .times(1)
            .return_once(|| Err(Error::internal("database error")));

        let (status, body) = get_stats(query).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "database error");
    }
}
