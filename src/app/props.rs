//! Host-supplied inputs of a combo box.
//!
//! [`Props`] bundles the current value with the injected capabilities the engine
//! consumes: the item fetcher, the value formatter, the item renderer and the
//! optional notification callbacks. Props are read-only to the engine; a host
//! replaces them wholesale through [`crate::ComboBox::set_props`].
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::Props;
//! use futures_util::FutureExt;
//!
//! let props = Props::new(
//!     |query: String| async move { Ok(vec![format!("{query}ville")]) }.boxed_local(),
//!     |city: &String| city.clone(),
//! )
//! .with_value(Some("Springfield".to_string()))
//! .on_change(|city: &String| println!("picked {city}"));
//!
//! assert_eq!(props.format_value(props.value.as_ref()), "Springfield");
//! ```

use crate::domain::error::Result;
use futures_util::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;

/// Asynchronous item search: query in, candidates or failure out.
pub type FetchItems<T> = Rc<dyn Fn(String) -> LocalBoxFuture<'static, Result<Vec<T>>>>;

/// Converts a value to text.
pub type Formatter<T> = Rc<dyn Fn(&T) -> String>;

/// Argument-less notification.
pub type Callback = Rc<dyn Fn()>;

/// Outcome of the unexpected-input resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResolution<T> {
    /// Leave state untouched.
    Unchanged,

    /// Clear the input text.
    #[deprecated(note = "clear the value through `ComboBox::reset` instead")]
    Clear,

    /// Select the given value.
    Value(T),
}

/// Inputs provided by the host component.
pub struct Props<T> {
    /// Externally controlled current value.
    pub value: Option<T>,

    /// Item fetcher used by every search.
    pub fetch_items: FetchItems<T>,

    /// Text shown in the input for a value.
    pub value_to_string: Formatter<T>,

    /// Text content of a rendered menu row.
    pub render_item: Formatter<T>,

    /// Called when a value is chosen.
    pub on_change: Option<Rc<dyn Fn(&T)>>,

    /// Called when the input gains focus.
    pub on_focus: Option<Callback>,

    /// Called when the input loses focus.
    pub on_blur: Option<Callback>,

    /// Called after each user edit; a returned string replaces the text.
    pub on_input_change: Option<Rc<dyn Fn(&str) -> Option<String>>>,

    /// Resolves text left in the input on blur.
    pub on_unexpected_input: Option<Rc<dyn Fn(&str) -> InputResolution<T>>>,
}

impl<T> Props<T> {
    /// Creates props from the two mandatory capabilities.
    ///
    /// Menu rows render with the value formatter until
    /// [`with_render_item`](Self::with_render_item) says otherwise.
    pub fn new<F, S>(fetch_items: F, value_to_string: S) -> Self
    where
        F: Fn(String) -> LocalBoxFuture<'static, Result<Vec<T>>> + 'static,
        S: Fn(&T) -> String + 'static,
    {
        let value_to_string: Formatter<T> = Rc::new(value_to_string);
        Self {
            value: None,
            fetch_items: Rc::new(fetch_items),
            render_item: Rc::clone(&value_to_string),
            value_to_string,
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_input_change: None,
            on_unexpected_input: None,
        }
    }

    /// Sets the externally controlled value.
    #[must_use]
    pub fn with_value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    /// Renders menu rows with `render_item` instead of the value formatter.
    #[must_use]
    pub fn with_render_item(mut self, render_item: impl Fn(&T) -> String + 'static) -> Self {
        self.render_item = Rc::new(render_item);
        self
    }

    /// Sets the value-chosen callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    /// Sets the focus callback.
    #[must_use]
    pub fn on_focus(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_focus = Some(Rc::new(callback));
        self
    }

    /// Sets the blur callback.
    #[must_use]
    pub fn on_blur(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_blur = Some(Rc::new(callback));
        self
    }

    /// Sets the edit callback; returning `Some` rewrites the text.
    #[must_use]
    pub fn on_input_change(mut self, callback: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.on_input_change = Some(Rc::new(callback));
        self
    }

    /// Sets the resolver for text left unselected on blur.
    #[must_use]
    pub fn on_unexpected_input(
        mut self,
        resolver: impl Fn(&str) -> InputResolution<T> + 'static,
    ) -> Self {
        self.on_unexpected_input = Some(Rc::new(resolver));
        self
    }

    /// Display text for an optional value; `None` formats as an empty string.
    pub fn format_value(&self, value: Option<&T>) -> String {
        value.map_or_else(String::new, |value| (self.value_to_string)(value))
    }
}

impl<T: Clone> Clone for Props<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            fetch_items: Rc::clone(&self.fetch_items),
            value_to_string: Rc::clone(&self.value_to_string),
            render_item: Rc::clone(&self.render_item),
            on_change: self.on_change.clone(),
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
            on_input_change: self.on_input_change.clone(),
            on_unexpected_input: self.on_unexpected_input.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Props<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_input_change", &self.on_input_change.is_some())
            .field("on_unexpected_input", &self.on_unexpected_input.is_some())
            .finish_non_exhaustive()
    }
}
