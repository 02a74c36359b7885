use serde::Serialize;

/// Name and usage text the agent layer registers the scraper under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TOOL_DESCRIPTOR: ToolDescriptor = ToolDescriptor {
    name: "product_scraper",
    description: "Scrapes product information from e-commerce websites. Input should be a URL string.",
};
