use std::net::SocketAddr;

use axum::{Json, extract::State, routing::get};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::core::{
    clock::TimezoneClock,
    converter::TimeConverter,
    error::McpResult,
    models::{ConvertTimeRequest, GetCurrentTimeRequest},
};

/// MCP service exposing the timezone computation core as two tools.
///
/// Stateless by construction: every request builds fresh value types, and
/// the transport runs a logical service per session with no shared mutable
/// state, so concurrent callers need no coordination.
#[derive(Clone)]
pub struct TimeService {
    clock: TimezoneClock,
    converter: TimeConverter,
    default_timezone: String,
    tool_router: ToolRouter<TimeService>,
}

impl TimeService {
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_clock(config.default_timezone, TimezoneClock::new())
    }

    fn with_clock(default_timezone: Tz, clock: TimezoneClock) -> Self {
        Self {
            converter: TimeConverter::new(clock.clone()),
            clock,
            default_timezone: default_timezone.name().to_string(),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> McpResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to serialize result: {e}"), None))
}

#[tool_router]
impl TimeService {
    #[tool(description = "Get current time in a specific timezone")]
    pub(crate) async fn get_current_time(
        &self,
        Parameters(req): Parameters<GetCurrentTimeRequest>,
    ) -> McpResult<CallToolResult> {
        let timezone = req.timezone.as_deref().unwrap_or(&self.default_timezone);

        match self.clock.current_snapshot(timezone) {
            Ok(snapshot) => Ok(CallToolResult::success(vec![Content::text(
                to_pretty_json(&snapshot)?,
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error processing get_current_time query: {e}"
            ))])),
        }
    }

    #[tool(description = "Convert time between timezones")]
    pub(crate) async fn convert_time(
        &self,
        Parameters(req): Parameters<ConvertTimeRequest>,
    ) -> McpResult<CallToolResult> {
        let source_timezone = req
            .source_timezone
            .as_deref()
            .unwrap_or(&self.default_timezone);
        let target_timezone = req
            .target_timezone
            .as_deref()
            .unwrap_or(&self.default_timezone);

        match self
            .converter
            .convert(source_timezone, &req.time, target_timezone)
        {
            Ok(result) => Ok(CallToolResult::success(vec![Content::text(
                to_pretty_json(&result)?,
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error processing convert_time query: {e}"
            ))])),
        }
    }
}

#[tool_handler]
impl ServerHandler for TimeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Time MCP server for timezone operations. Tools: get_current_time, convert_time. \
                 Omitted timezone parameters default to {}. Use IANA timezone names.",
                self.default_timezone
            )),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Time MCP server initialized");
        Ok(self.get_info())
    }
}

#[derive(Debug, Clone)]
struct HealthState {
    default_timezone: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    default_timezone: String,
    timestamp: DateTime<Utc>,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        default_timezone: state.default_timezone,
        timestamp: Utc::now(),
    })
}

/// Serve the MCP endpoint and health check until ctrl-c.
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    };

    let service_config = config.clone();
    let mcp_service = StreamableHttpService::new(
        move || Ok(TimeService::new(&service_config)),
        LocalSessionManager::default().into(),
        // Stateless mode: no session ids, each request stands alone
        StreamableHttpServerConfig {
            sse_keep_alive: None,
            stateful_mode: false,
        },
    );

    let health_state = HealthState {
        default_timezone: config.default_timezone.name().to_string(),
    };
    let router = axum::Router::new()
        .nest_service("/mcp", mcp_service)
        .route("/health", get(health))
        .with_state(health_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("MCP Time Server listening on port {}", config.port);
    tracing::info!("Default timezone: {}", config.default_timezone.name());
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("MCP endpoint: http://localhost:{}/mcp", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Received shutdown signal. Shutting down gracefully...");
}
