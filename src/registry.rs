use std::collections::HashMap;
use std::sync::Arc;

use crate::plugin::{Plugin, PluginInfo};
use crate::plugins;

/// Ordered, immutable collection of plugins.
///
/// The registry is built once at process start and only read afterwards, so
/// it can be shared across threads without locking. Registration order is
/// the externally observable listing order and is stable across calls.
pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn Plugin>>,
    order: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a registry populated with all built-in plugins in their
    /// canonical order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        plugins::register_all(&mut registry);
        registry
    }

    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) {
        let shared: Arc<dyn Plugin> = Arc::new(plugin);
        self.plugins
            .insert(shared.name().to_string(), Arc::clone(&shared));
        self.order.push(shared);
    }

    /// Looks up a plugin by its exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Plugin>> {
        self.plugins.get(name)
    }

    /// All registered plugins, in registration order.
    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Builds the listing records consumed by the presentation layers,
    /// preserving registration order.
    pub fn listing(&self) -> Vec<PluginInfo> {
        self.order
            .iter()
            .map(|plugin| PluginInfo::of(plugin.as_ref()))
            .collect()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
