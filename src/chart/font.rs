//! @ai:module:intent Renderer-wide font family setting with scoped override
//! @ai:module:layer infrastructure
//! @ai:module:public_api FontFamilyGuard, current_font_family, DEFAULT_FONT_FAMILY
//! @ai:module:stateless false

use std::cell::RefCell;
use std::marker::PhantomData;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

thread_local! {
    static FONT_FAMILY: RefCell<String> = RefCell::new(DEFAULT_FONT_FAMILY.to_string());
}

/// @ai:intent Font family renderers on this thread draw text with
/// @ai:effects state:read
pub fn current_font_family() -> String {
    FONT_FAMILY.with(|family| family.borrow().clone())
}

/// @ai:intent Installs a font family and restores the previous one when dropped
/// @ai:post after drop, current_font_family() equals its value before set()
pub struct FontFamilyGuard {
    previous: Option<String>,
    // Restoring must happen on the thread that installed the override.
    _not_send: PhantomData<*const ()>,
}

impl FontFamilyGuard {
    /// @ai:intent Override the font family until the guard is dropped
    /// @ai:effects state:write
    pub fn set(family: &str) -> Self {
        let previous = FONT_FAMILY.with(|current| current.replace(family.to_string()));

        Self {
            previous: Some(previous),
            _not_send: PhantomData,
        }
    }
}

impl Drop for FontFamilyGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            FONT_FAMILY.with(|current| *current.borrow_mut() = previous);
        }
    }
}
