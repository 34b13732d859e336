// Spending Analyzer - Web Server
// JSON API + embedded dashboard page

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Local;
use serde::Serialize;
use tower_http::cors::CorsLayer;

use spending_analyzer::{
    analyze_spending, build_statement, generate_summary, generate_transactions,
    prepare_chart_data, render_statement_pdf, statement_filename, ChartData, SpendingStats,
    StatementSummary, Transaction, DEFAULT_RECORD_COUNT,
};

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, error: String) -> Self {
        Self {
            success: false,
            data,
            error: Some(error),
        }
    }
}

/// Dashboard payload: stats, narrative and chart series for one fresh set
#[derive(Serialize)]
struct RefreshResponse {
    stats: SpendingStats,
    ai_summary: String,
    charts: ChartData,
    recent_transactions: Vec<Transaction>,
}

/// Statement payload
#[derive(Serialize)]
struct StatementResponse {
    statement_summary: StatementSummary,
    monthly_transactions: Vec<Transaction>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/refresh - Regenerate data and return stats, summary and charts
async fn refresh_data() -> impl IntoResponse {
    let today = Local::now().date_naive();
    let transactions = generate_transactions(DEFAULT_RECORD_COUNT);

    let stats = analyze_spending(&transactions, today);
    let ai_summary = generate_summary(&stats, &transactions);
    let charts = prepare_chart_data(&transactions);
    let recent_transactions = transactions.into_iter().take(15).collect();

    Json(ApiResponse::ok(RefreshResponse {
        stats,
        ai_summary,
        charts,
        recent_transactions,
    }))
}

/// GET /api/statement - Build a monthly statement from a fresh set
async fn get_statement() -> impl IntoResponse {
    let today = Local::now().date_naive();
    let transactions = generate_transactions(DEFAULT_RECORD_COUNT);

    match build_statement(&transactions, today) {
        Ok((statement_summary, subset)) => {
            let monthly_transactions = subset.into_iter().take(20).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::ok(Some(StatementResponse {
                    statement_summary,
                    monthly_transactions,
                }))),
            )
                .into_response()
        }
        Err(e) => {
            eprintln!("Error building statement: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::err(None::<StatementResponse>, e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /api/transactions - Get a freshly generated set
async fn get_transactions() -> impl IntoResponse {
    Json(ApiResponse::ok(generate_transactions(DEFAULT_RECORD_COUNT)))
}

/// GET /download_statement - Statement as a PDF attachment
async fn download_statement() -> impl IntoResponse {
    let today = Local::now().date_naive();
    let transactions = generate_transactions(DEFAULT_RECORD_COUNT);

    let (summary, subset) = match build_statement(&transactions, today) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error building statement: {}", e);
            return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response();
        }
    };

    match render_statement_pdf(&summary, &subset) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", statement_filename(today)),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error rendering statement PDF: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET / - Serve the dashboard page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Spending Analyzer - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/refresh", get(refresh_data))
        .route("/statement", get(get_statement))
        .route("/transactions", get(get_transactions));

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/download_statement", get(download_statement))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:5000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:5000");
    println!("   API: http://localhost:5000/api/refresh");
    println!("   UI:  http://localhost:5000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
