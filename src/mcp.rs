use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::formatters::format_report;
use crate::geometry::Coordinate;
use crate::models::GetCo2Request;
use crate::service::StatsService;

/// CO2 lookup exposed as an MCP tool
#[derive(Clone)]
pub struct Co2Tool {
    service: StatsService,
    tool_router: ToolRouter<Self>,
}

impl Co2Tool {
    pub fn new(service: StatsService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for Co2Tool {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "co2-stats".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "CO2 emission statistics from the GHG Center ODIAC monthly grid. \
                Provides min/mean/max/majority emissions for a small area next to a coordinate."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Co2Tool {
    /// Gets CO2 emission statistics near a coordinate
    #[tool(description = "Get monthly fossil fuel CO2 emission statistics (tonne C/km²/month) for a 0.2 degree square south-west of a location. Provide latitude (-90 to 90) and longitude (-180 to 180).")]
    async fn get_co2_statistics(
        &self,
        Parameters(request): Parameters<GetCo2Request>,
    ) -> Result<CallToolResult, McpError> {
        let point = Coordinate::new(request.latitude, request.longitude)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let report = self
            .service
            .get_co2_statistics(point)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(format_report(&report))]))
    }
}
