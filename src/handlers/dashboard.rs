use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::report::ReportStats;
use crate::state::BoardState;
use crate::supabase::SupabaseClient;
use crate::templates_structs::{DashboardTemplate, ReportCard};

pub async fn index(state: web::Data<BoardState>) -> Result<HttpResponse, AppError> {
    let (reports, loading) = state.snapshot().await;

    let stats = ReportStats::tally(&reports);
    let cards = reports.iter().map(ReportCard::from).collect();

    let tmpl = DashboardTemplate { stats, cards, loading };
    render(tmpl)
}

/// Manual refresh: re-run the fetch, then return to the board.
pub async fn refresh(
    state: web::Data<BoardState>,
    client: web::Data<SupabaseClient>,
) -> HttpResponse {
    state.refresh(client.get_ref()).await;
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}
