//! Well-known capability names and the creator-manager surface used by
//! diagnostics.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Setting: enables framework debug pages.
pub const DEBUG_SETTING: &str = "debug";
/// Setting: allows test methods that cannot be called to be listed.
pub const ALLOW_IMPOSSIBLE_TESTS_SETTING: &str = "allowImpossibleTests";
/// Setting: compresses generated scripts.
pub const SCRIPT_COMPRESSED_SETTING: &str = "scriptCompressed";

/// Settings seeded by the default configurator, with their default values.
pub const DEFAULT_SETTINGS: [(&str, &str); 3] = [
  (DEBUG_SETTING, "false"),
  (ALLOW_IMPOSSIBLE_TESTS_SETTING, "false"),
  (SCRIPT_COMPRESSED_SETTING, "false"),
];

/// A pluggable framework service, looked up by name at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
  AccessControl,
  ConverterManager,
  CreatorManager,
  UrlProcessor,
  WebContextBuilder,
  ServerContextBuilder,
  AjaxFilterManager,
  Remoter,
  DebugPageGenerator,
  HtmlJsMarshaller,
  PlainJsMarshaller,
  ScriptSessionManager,
  ServerLoadMonitor,
}

impl Capability {
  /// Every capability, in the order the default configurator seeds them.
  pub const ALL: [Capability; 13] = [
    Capability::AccessControl,
    Capability::ConverterManager,
    Capability::CreatorManager,
    Capability::UrlProcessor,
    Capability::WebContextBuilder,
    Capability::ServerContextBuilder,
    Capability::AjaxFilterManager,
    Capability::Remoter,
    Capability::DebugPageGenerator,
    Capability::HtmlJsMarshaller,
    Capability::PlainJsMarshaller,
    Capability::ScriptSessionManager,
    Capability::ServerLoadMonitor,
  ];

  /// The registry key.
  pub const fn name(self) -> &'static str {
    match self {
      Capability::AccessControl => "AccessControl",
      Capability::ConverterManager => "ConverterManager",
      Capability::CreatorManager => "CreatorManager",
      Capability::UrlProcessor => "UrlProcessor",
      Capability::WebContextBuilder => "WebContextBuilder",
      Capability::ServerContextBuilder => "ServerContextBuilder",
      Capability::AjaxFilterManager => "AjaxFilterManager",
      Capability::Remoter => "Remoter",
      Capability::DebugPageGenerator => "DebugPageGenerator",
      Capability::HtmlJsMarshaller => "HtmlJsMarshaller",
      Capability::PlainJsMarshaller => "PlainJsMarshaller",
      Capability::ScriptSessionManager => "ScriptSessionManager",
      Capability::ServerLoadMonitor => "ServerLoadMonitor",
    }
  }

  /// Identifier of the implementation bound when nothing overrides it.
  pub const fn default_implementation(self) -> &'static str {
    match self {
      Capability::AccessControl => "DefaultAccessControl",
      Capability::ConverterManager => "DefaultConverterManager",
      Capability::CreatorManager => "DefaultCreatorManager",
      Capability::UrlProcessor => "UrlProcessor",
      Capability::WebContextBuilder => "DefaultWebContextBuilder",
      Capability::ServerContextBuilder => "DefaultServerContextBuilder",
      Capability::AjaxFilterManager => "DefaultAjaxFilterManager",
      Capability::Remoter => "DefaultRemoter",
      Capability::DebugPageGenerator => "DefaultDebugPageGenerator",
      Capability::HtmlJsMarshaller => "HtmlJsMarshaller",
      Capability::PlainJsMarshaller => "PlainJsMarshaller",
      Capability::ScriptSessionManager => "DefaultScriptSessionManager",
      Capability::ServerLoadMonitor => "DefaultServerLoadMonitor",
    }
  }
}

impl fmt::Display for Capability {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// --- Creators ---

/// A strategy for producing the objects exposed under one remoted name.
pub trait Creator: Send + Sync {
  /// Short name of the strategy, e.g. `new` or `static`.
  fn kind(&self) -> &str;

  fn type_name(&self) -> &'static str {
    std::any::type_name::<Self>()
  }
}

/// The object-creator manager capability, reduced to what diagnostics needs.
pub trait CreatorManager: Send + Sync {
  /// Names of all registered creators, in registration order.
  fn creator_names(&self) -> Vec<String>;

  fn creator(&self, name: &str) -> Option<Arc<dyn Creator>>;

  fn type_name(&self) -> &'static str {
    std::any::type_name::<Self>()
  }
}

/// Creator manager backing the `DefaultCreatorManager` identifier.
#[derive(Default)]
pub struct DefaultCreatorManager {
  creators: RwLock<IndexMap<String, Arc<dyn Creator>>>,
}

impl DefaultCreatorManager {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `creator` under `name`, replacing any previous creator.
  pub fn add_creator(&self, name: impl Into<String>, creator: Arc<dyn Creator>) {
    self.creators.write().insert(name.into(), creator);
  }
}

impl CreatorManager for DefaultCreatorManager {
  fn creator_names(&self) -> Vec<String> {
    self.creators.read().keys().cloned().collect()
  }

  fn creator(&self, name: &str) -> Option<Arc<dyn Creator>> {
    self.creators.read().get(name).cloned()
  }
}

/// Creates a fresh object of the target type for each call.
#[derive(Debug, Clone)]
pub struct NewCreator {
  target: String,
}

impl NewCreator {
  pub fn new(target: impl Into<String>) -> Self {
    Self {
      target: target.into(),
    }
  }

  pub fn target(&self) -> &str {
    &self.target
  }
}

impl Creator for NewCreator {
  fn kind(&self) -> &str {
    "new"
  }
}
