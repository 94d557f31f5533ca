//! MCP surface: the two study tools served over stdio.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    handlers::study_handler,
    models::dto::request::{FindResourcesRequest, GenerateQuestionsRequest},
};

#[derive(Clone)]
pub struct StudyServer {
    state: AppState,
    tool_router: ToolRouter<StudyServer>,
}

#[tool_router]
impl StudyServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Generate practice questions for a topic with answers and explanations to help you study."
    )]
    async fn generate_study_questions(
        &self,
        Parameters(request): Parameters<GenerateQuestionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = study_handler::generate_study_questions(&self.state, request);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Find learning resources and study strategies for any topic including videos, articles, and practice sites."
    )]
    async fn find_study_resources(
        &self,
        Parameters(request): Parameters<FindResourcesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = study_handler::find_study_resources(&self.state, request);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for StudyServer {
    fn get_info(&self) -> ServerInfo {
        let config = &self.state.config;
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: config.server_name.clone(),
                version: config.server_version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(config.instructions.clone()),
            ..Default::default()
        }
    }
}

/// Serves the tools on stdin/stdout until the client disconnects.
pub async fn serve_stdio(state: AppState) -> AppResult<()> {
    let service = StudyServer::new(state)
        .serve(stdio())
        .await
        .map_err(|e| AppError::TransportError(e.to_string()))?;

    log::info!("Study helper server ready on stdio");

    let reason = service
        .waiting()
        .await
        .map_err(|e| AppError::TransportError(e.to_string()))?;
    log::info!("Study helper server stopped: {:?}", reason);

    Ok(())
}
