use std::sync::Arc;

use coach_core::render;
use coach_core::serde_compat::WireMemory;
use coach_store::CoachStore;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::session::Coach;

#[derive(Clone)]
pub struct CoachServer {
    coach: Arc<Mutex<Coach>>,
    tool_router: ToolRouter<Self>,
}

impl CoachServer {
    pub fn new(store: CoachStore) -> Self {
        Self::with_coach(Coach::new(store))
    }

    pub fn with_coach(coach: Coach) -> Self {
        Self {
            coach: Arc::new(Mutex::new(coach)),
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct MessageRequest {
    /// What the user said: a free-text check-in, or one of the commands
    /// `why`, `save`, `reset`, `correct: <mood>`
    text: String,
}

#[tool_router]
impl CoachServer {
    #[tool(
        description = "Send one user message to the mood coach. Free text is classified into a mood (stressed, tired, sad, happy, neutral) and answered with suggestions and a quote. Also accepts the commands `why`, `save`, `reset` and `correct: <mood>`. Returns the reply messages in order; relay them to the user verbatim."
    )]
    async fn coach_message(
        &self,
        Parameters(req): Parameters<MessageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut coach = self.coach.lock().await;
        let messages = coach
            .handle(&req.text)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let result = serde_json::json!({ "messages": messages });
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }

    #[tool(description = "Show the recent mood history (up to 10 records, oldest first).")]
    async fn coach_history(&self) -> Result<CallToolResult, McpError> {
        let coach = self.coach.lock().await;
        let state = coach.store().memory().load();
        let wire = WireMemory::from_state(&state);

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&wire).unwrap_or_default(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for CoachServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "You are relaying a mood coach. Pass every user message to coach_message \
                 unchanged and show the returned messages as-is. Use coach_history only \
                 when the user asks about past moods.\n\n{}",
                render::welcome()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
