use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::{json, Value};

use crate::matcher::{QueryResult, Recipe, RecipeMatcher};

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestRecipesParams {
    /// Ingredients on hand, separated by commas or spaces
    pub ingredients: String,
    #[serde(default)]
    pub top_k: Option<i64>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRecipeDetailsParams {
    pub name: String,
}

/// JSON shape of a ranked suggestion, as rendered by clients.
pub fn suggestion_json(result: &QueryResult) -> Value {
    json!({
        "name": result.name(),
        "score": result.score,
        "match_percent": result.match_percent(),
        "ingredients": result.recipe.ingredients(),
        "instructions": result.recipe.instructions(),
        "matched_ingredients": result.matched_ingredients(),
        "missing_ingredients": result.missing_ingredients(),
    })
}

pub fn recipe_json(recipe: &Recipe) -> Value {
    json!({
        "name": recipe.name(),
        "ingredients": recipe.ingredients(),
        "instructions": recipe.instructions(),
        "tags": recipe.tags(),
    })
}

fn json_content(value: &Value) -> Result<Vec<Content>, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(vec![Content::text(text)])
}

#[derive(Clone)]
pub struct MealMakerMcpServer {
    matcher: Arc<RecipeMatcher>,
    default_top_k: i64,
    tool_router: ToolRouter<MealMakerMcpServer>,
}

#[tool_router]
impl MealMakerMcpServer {
    pub fn new(matcher: Arc<RecipeMatcher>, default_top_k: i64) -> Self {
        Self {
            matcher,
            default_top_k,
            tool_router: Self::tool_router(),
        }
    }

    pub fn matcher(&self) -> &RecipeMatcher {
        &self.matcher
    }

    /// Rank the catalog off the async executor.
    pub async fn run_suggest(
        &self,
        ingredients: String,
        top_k: Option<i64>,
    ) -> Result<Vec<QueryResult>, anyhow::Error> {
        let matcher = Arc::clone(&self.matcher);
        let top_k = top_k.unwrap_or(self.default_top_k);
        let results =
            tokio::task::spawn_blocking(move || matcher.suggest(&ingredients, top_k)).await?;
        Ok(results)
    }

    #[tool(description = "Suggest recipes that can be made from the ingredients on hand")]
    pub async fn suggest_recipes(
        &self,
        Parameters(params): Parameters<SuggestRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: suggest_recipes");

        match self.run_suggest(params.ingredients, params.top_k).await {
            Ok(results) => {
                let message = if results.is_empty() {
                    "No ingredients recognized, nothing to suggest".to_string()
                } else {
                    format!("Found {} recipe suggestions", results.len())
                };

                let result = json!({
                    "suggestions": results.iter().map(suggestion_json).collect::<Vec<_>>(),
                    "scorer": self.matcher.scorer_name(),
                    "message": message
                });

                Ok(CallToolResult::success(json_content(&result)?))
            }
            Err(e) => {
                tracing::error!("Suggestion task failed: {}", e);
                let error = json!({
                    "error": "Failed to suggest recipes",
                    "details": e.to_string()
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "List every recipe in the catalog")]
    pub async fn list_recipes(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: list_recipes");

        let recipes_json: Vec<Value> = self
            .matcher
            .recipes()
            .iter()
            .map(|recipe| {
                json!({
                    "name": recipe.name(),
                    "ingredients": recipe.ingredients(),
                    "tags": recipe.tags()
                })
            })
            .collect();

        let result = json!({
            "recipes": recipes_json,
            "total_count": self.matcher.len()
        });

        Ok(CallToolResult::success(json_content(&result)?))
    }

    #[tool(description = "Get the full recipe, including instructions, by its name")]
    pub async fn get_recipe_details(
        &self,
        Parameters(params): Parameters<GetRecipeDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: get_recipe_details for '{}'", params.name);

        match self.matcher.find(&params.name) {
            Some(recipe) => Ok(CallToolResult::success(json_content(&recipe_json(&recipe))?)),
            None => {
                let error = json!({
                    "error": "Recipe not found",
                    "details": format!("No recipe named '{}'", params.name)
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for MealMakerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server suggests recipes from a fixed catalog based on the ingredients you have. Use suggest_recipes with a comma or space separated ingredient list, list_recipes to browse the catalog, and get_recipe_details to read a recipe by name.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
