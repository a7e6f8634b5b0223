//! Page Model
//!
//! The static record behind the profile page: a headline, seven ordered
//! section captions, a footer and the picture gallery.
//!
//! Field names double as template binding names, so `many_foods` is
//! serialized as `manyFoods`.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

pub const TITLE: &str = "Personal Profile Web page";
pub const FOOTER: &str = "Asia Pacific College";

/// Section captions in display order
pub const SECTIONS: [&str; 7] = [
    "1 About Me",
    "2 Education / Achievements",
    "3 Course",
    "4 IT Experience",
    "5 Hobbies & Interests",
    "6 Goals In Life / Dream",
    "7 Picture Gallery",
];

/// Gallery image URLs in display order
pub const GALLERY: [&str; 7] = [
    "https://www.w3schools.com/vue/img_burrito.svg",
    "https://www.w3schools.com/vue/img_salad.svg",
    "https://www.w3schools.com/vue/img_cake.svg",
    "https://www.w3schools.com/vue/img_soup.svg",
    "https://www.w3schools.com/vue/img_fish.svg",
    "https://www.w3schools.com/vue/img_pizza.svg",
    "https://www.w3schools.com/vue/img_rice.svg",
];

/// Display strings and image references for the profile page.
///
/// Built once by [`create_model`] and only ever read afterwards. Renderers
/// borrow it (or share it behind an `Arc`) for the duration of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageModel {
    pub title: String,
    pub section1: String,
    pub section2: String,
    pub section3: String,
    pub section4: String,
    pub section5: String,
    pub section6: String,
    pub section7: String,
    pub footer: String,
    #[serde(rename = "manyFoods")]
    pub many_foods: Vec<String>,
}

/// Build the page model from its literal content
pub fn create_model() -> PageModel {
    let [section1, section2, section3, section4, section5, section6, section7] =
        SECTIONS.map(str::to_string);

    PageModel {
        title: TITLE.to_string(),
        section1,
        section2,
        section3,
        section4,
        section5,
        section6,
        section7,
        footer: FOOTER.to_string(),
        many_foods: GALLERY.iter().map(|url| url.to_string()).collect(),
    }
}

impl Default for PageModel {
    fn default() -> Self {
        create_model()
    }
}

impl PageModel {
    /// Section captions in order (section1 first)
    pub fn sections(&self) -> [&str; 7] {
        [
            self.section1.as_str(),
            self.section2.as_str(),
            self.section3.as_str(),
            self.section4.as_str(),
            self.section5.as_str(),
            self.section6.as_str(),
            self.section7.as_str(),
        ]
    }

    /// Gallery URLs in display order
    pub fn gallery(&self) -> &[String] {
        &self.many_foods
    }

    /// Check that every field carries content.
    ///
    /// Reports the first offending field by its binding name.
    pub fn validate(&self) -> Result<(), ModelError> {
        const SECTION_NAMES: [&str; 7] = [
            "section1", "section2", "section3", "section4", "section5", "section6", "section7",
        ];

        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyField("title"));
        }
        for (name, caption) in SECTION_NAMES.into_iter().zip(self.sections()) {
            if caption.trim().is_empty() {
                return Err(ModelError::EmptyField(name));
            }
        }
        if self.footer.trim().is_empty() {
            return Err(ModelError::EmptyField("footer"));
        }
        if self.many_foods.is_empty() {
            return Err(ModelError::EmptyGallery);
        }
        if let Some(idx) = self.many_foods.iter().position(|url| url.trim().is_empty()) {
            return Err(ModelError::EmptyImage(idx));
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
