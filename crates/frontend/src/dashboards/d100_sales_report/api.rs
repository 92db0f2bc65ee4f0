use contracts::dashboards::d100_sales_report::dto::SalesReport;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, authorize};
use crate::system::session::Session;

pub async fn fetch_sales_report(session: &Session) -> Result<SalesReport, String> {
    let response = authorize(Request::get(&api_url("/api/sales-report/")), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetch sales report failed: {}", response.status()));
    }

    response
        .json::<SalesReport>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
