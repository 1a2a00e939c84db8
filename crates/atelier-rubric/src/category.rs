use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of critique categories.
///
/// The serde names match the keys the model contract uses in its JSON
/// output, so a `Category` round-trips through the wire format unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Composition and Design")]
    CompositionAndDesign,
    #[serde(rename = "Proportions and Anatomy")]
    ProportionsAndAnatomy,
    #[serde(rename = "Perspective and Depth")]
    PerspectiveAndDepth,
    #[serde(rename = "Use of Light and Shadow")]
    UseOfLightAndShadow,
    #[serde(rename = "Color Theory and Application")]
    ColorTheoryAndApplication,
    #[serde(rename = "Brushwork and Technique")]
    BrushworkAndTechnique,
    #[serde(rename = "Expression and Emotion")]
    ExpressionAndEmotion,
    #[serde(rename = "Creativity and Originality")]
    CreativityAndOriginality,
    #[serde(rename = "Attention to Detail")]
    AttentionToDetail,
    #[serde(rename = "Overall Impact")]
    OverallImpact,
}

impl Category {
    /// All categories, in the order the rubric presents them.
    pub const ALL: [Category; 10] = [
        Category::CompositionAndDesign,
        Category::ProportionsAndAnatomy,
        Category::PerspectiveAndDepth,
        Category::UseOfLightAndShadow,
        Category::ColorTheoryAndApplication,
        Category::BrushworkAndTechnique,
        Category::ExpressionAndEmotion,
        Category::CreativityAndOriginality,
        Category::AttentionToDetail,
        Category::OverallImpact,
    ];

    /// The display name, identical to the model contract's JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            Category::CompositionAndDesign => "Composition and Design",
            Category::ProportionsAndAnatomy => "Proportions and Anatomy",
            Category::PerspectiveAndDepth => "Perspective and Depth",
            Category::UseOfLightAndShadow => "Use of Light and Shadow",
            Category::ColorTheoryAndApplication => "Color Theory and Application",
            Category::BrushworkAndTechnique => "Brushwork and Technique",
            Category::ExpressionAndEmotion => "Expression and Emotion",
            Category::CreativityAndOriginality => "Creativity and Originality",
            Category::AttentionToDetail => "Attention to Detail",
            Category::OverallImpact => "Overall Impact",
        }
    }

    /// Look up a category by its display name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
