//! # View Registry
//!
//! Name-keyed catalog of [`ViewDescriptor`]s. The registry is the lookup
//! point for callers that work with views dynamically - resolving a view
//! name to its decode table or its rendered base query - while the static
//! bindings in [`views`](crate::views) bypass it entirely.
//!
//! [`ViewRegistry::builtin`] builds a registry holding every view this crate
//! declares; [`global`] memoizes that registry for the process lifetime.

use std::collections::HashMap;
use std::sync::OnceLock;

use eyre::{bail, Result};

use crate::descriptor::ViewDescriptor;
use crate::views;

/// Catalog of view descriptors keyed by view name.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewDescriptor>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding every view declared in
    /// [`views`](crate::views).
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(views::aircraft_type_view_descriptor()?)?;
        registry.register(views::ais_device_command_view_descriptor()?)?;
        registry.register(views::ais_device_command_reply_view_descriptor()?)?;
        registry.register(views::ais_device_raw_message_view_descriptor()?)?;
        registry.register(views::ais_device_raw_sentence_view_descriptor()?)?;
        registry.register(views::ais_message_view_descriptor()?)?;
        registry.register(views::aid_to_navigation_report_message_view_descriptor()?)?;
        registry.register(views::ais_base_station_report_message_view_descriptor()?)?;
        registry.register(views::camera_configuration_view_descriptor()?)?;
        Ok(registry)
    }

    /// Adds a descriptor under its view name. View names are unique.
    pub fn register(&mut self, descriptor: ViewDescriptor) -> Result<()> {
        let name = descriptor.view_name().to_string();
        if self.views.contains_key(&name) {
            bail!("view '{}' is already registered", name);
        }
        self.views.insert(name, descriptor);
        Ok(())
    }

    pub fn get(&self, view_name: &str) -> Option<&ViewDescriptor> {
        self.views.get(view_name)
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn resolve(&self, view_name: &str) -> Result<&ViewDescriptor> {
        match self.views.get(view_name) {
            Some(descriptor) => Ok(descriptor),
            None => bail!("unknown view '{}'", view_name),
        }
    }

    /// Rendered `SELECT ... FROM` text for the named view.
    pub fn base_query(&self, view_name: &str) -> Result<&str> {
        Ok(self.resolve(view_name)?.base_query())
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ViewDescriptor> {
        self.views.values()
    }
}

static GLOBAL: OnceLock<ViewRegistry> = OnceLock::new();

/// Process-wide registry of the built-in views, built on first use.
pub fn global() -> Result<&'static ViewRegistry> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let built = ViewRegistry::builtin()?;
    Ok(GLOBAL.get_or_init(|| built))
}
