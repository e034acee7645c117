//! Editor tool selection
//!
//! The editor sidebar switches between these tools; the canvas and the AI
//! services that act on them are hosted elsewhere.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EditorTool {
    #[default]
    Resize,
    Crop,
    Adjust,
    Text,
    BackgroundRemoval,
    AiExtender,
    AiEdit,
    Upscale,
}

impl EditorTool {
    const ALL: [EditorTool; 8] = [
        EditorTool::Resize,
        EditorTool::Crop,
        EditorTool::Adjust,
        EditorTool::Text,
        EditorTool::BackgroundRemoval,
        EditorTool::AiExtender,
        EditorTool::AiEdit,
        EditorTool::Upscale,
    ];

    pub fn all() -> &'static [EditorTool] {
        &Self::ALL
    }

    /// Name used in `?tool=` links into the editor
    pub fn slug(&self) -> &'static str {
        match self {
            EditorTool::Resize => "resize",
            EditorTool::Crop => "crop",
            EditorTool::Adjust => "adjust",
            EditorTool::Text => "text",
            EditorTool::BackgroundRemoval => "background",
            EditorTool::AiExtender => "ai_extender",
            EditorTool::AiEdit => "ai_edit",
            EditorTool::Upscale => "upscale",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorTool::Resize => "Resize",
            EditorTool::Crop => "Crop",
            EditorTool::Adjust => "Adjust",
            EditorTool::Text => "Text",
            EditorTool::BackgroundRemoval => "AI Background",
            EditorTool::AiExtender => "AI Image Extender",
            EditorTool::AiEdit => "AI Editing",
            EditorTool::Upscale => "AI Upscaler",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EditorTool::Resize => "Change project dimensions",
            EditorTool::Crop => "Crop and trim your image",
            EditorTool::Adjust => "Brightness, contrast, and more",
            EditorTool::Text => "Add and style text",
            EditorTool::BackgroundRemoval => "Remove or replace the background",
            EditorTool::AiExtender => "Extend image boundaries with AI",
            EditorTool::AiEdit => "Edit with natural language prompts",
            EditorTool::Upscale => "Increase resolution up to 4x",
        }
    }

    /// Icon name under `/icons`
    pub fn icon(&self) -> &'static str {
        match self {
            EditorTool::Resize => "expand",
            EditorTool::Crop => "crop",
            EditorTool::Adjust => "sliders",
            EditorTool::Text => "type",
            EditorTool::BackgroundRemoval => "eraser",
            EditorTool::AiExtender => "maximize",
            EditorTool::AiEdit => "wand",
            EditorTool::Upscale => "upscale",
        }
    }

    /// Tools backed by a hosted AI service
    pub fn is_ai(&self) -> bool {
        matches!(
            self,
            EditorTool::BackgroundRemoval
                | EditorTool::AiExtender
                | EditorTool::AiEdit
                | EditorTool::Upscale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_resize() {
        assert_eq!(EditorTool::default(), EditorTool::Resize);
    }

    #[test]
    fn test_slug_round_trip_for_every_tool() {
        for tool in EditorTool::all() {
            assert_eq!(EditorTool::from_slug(tool.slug()), Some(*tool));
        }
        assert_eq!(EditorTool::from_slug("lasso"), None);
    }

    #[test]
    fn test_ai_tools() {
        let ai: Vec<_> = EditorTool::all().iter().filter(|t| t.is_ai()).collect();
        assert_eq!(ai.len(), 4);
        assert!(!EditorTool::Crop.is_ai());
    }

    #[test]
    fn test_from_slug_for_links() {
        assert_eq!(
            EditorTool::from_slug("background"),
            Some(EditorTool::BackgroundRemoval)
        );
        assert_eq!(EditorTool::from_slug("ai_extender"), Some(EditorTool::AiExtender));
        assert_eq!(EditorTool::from_slug("Background"), None);
    }
}
