mod common;

use common::{capture, write_resource};
use fibre_bootstrap::capability::DEFAULT_SETTINGS;
use fibre_bootstrap::{
  Capability, Configurator, Container, CustomConfigurator, DefaultConfigurator, Error,
  FileConfigurator, HostContext, InitParamConfigurator, InitParams, Instance, Plugins,
};
use std::sync::Arc;
use tracing::level_filters::LevelFilter;

fn context(root: &std::path::Path) -> Arc<HostContext> {
  Arc::new(HostContext::new("test server").with_resource_root(root))
}

// --- Default Configurator ---

#[test]
fn test_defaults_bind_every_capability() {
  // Arrange
  let mut container = Container::new();

  // Act
  DefaultConfigurator::new().configure(&mut container).unwrap();

  // Assert
  for capability in Capability::ALL {
    let binding = container
      .capability(capability)
      .unwrap_or_else(|| panic!("{} has no binding", capability));
    assert!(binding.is_present(), "{} is blank", capability);
    assert_eq!(binding.as_setting(), Some(capability.default_implementation()));
  }
  for (name, value) in DEFAULT_SETTINGS {
    assert_eq!(container.get_setting(name), Some(value));
  }
  assert_eq!(container.len(), Capability::ALL.len() + DEFAULT_SETTINGS.len());
}

// --- Init Parameter Configurator ---

#[test]
fn test_init_params_override_defaults_verbatim() {
  // Arrange
  let mut container = Container::new();
  DefaultConfigurator::setup_defaults(&mut container);
  let params = InitParams::new()
    .with("debug", "true")
    .with("AccessControl", "MyAccessControl")
    .with("somethingNobodyKnows", " kept as is ");

  // Act
  InitParamConfigurator::new(params).configure(&mut container).unwrap();

  // Assert
  assert_eq!(container.get_setting("debug"), Some("true"));
  assert_eq!(container.get_setting("AccessControl"), Some("MyAccessControl"));
  assert_eq!(container.get_setting("somethingNobodyKnows"), Some(" kept as is "));
}

#[test]
fn test_init_params_are_idempotent() {
  let params = InitParams::new().with("debug", "true").with("config", "a.yaml");
  let configurator = InitParamConfigurator::new(params);

  let mut once = Container::new();
  configurator.configure(&mut once).unwrap();

  let mut twice = Container::new();
  configurator.configure(&mut twice).unwrap();
  configurator.configure(&mut twice).unwrap();

  assert_eq!(format!("{:?}", once), format!("{:?}", twice));
}

#[test]
fn test_empty_init_params_are_a_no_op() {
  let mut container = Container::new();
  InitParamConfigurator::new(InitParams::new())
    .configure(&mut container)
    .unwrap();
  assert!(container.is_empty());
}

// --- File Configurator ---

#[test]
fn test_yaml_resource_sets_params_and_beans() {
  // Arrange
  let dir = tempfile::tempdir().unwrap();
  write_resource(
    dir.path(),
    "remoting.yaml",
    "version: 1\nparams:\n  debug: false\n  maxCallCount: 20\nbeans:\n  CreatorManager: DefaultCreatorManager\n",
  );
  let plugins = Plugins::with_builtins();
  let mut container = Container::new();

  // Act
  FileConfigurator::new("/remoting.yaml", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap();

  // Assert
  assert_eq!(container.get_setting("debug"), Some("false"));
  assert_eq!(container.get_setting("maxCallCount"), Some("20"));
  assert!(container
    .get_bean::<dyn fibre_bootstrap::CreatorManager>("CreatorManager")
    .is_some());
}

#[test]
fn test_numeric_params_are_stored_as_written() {
  let dir = tempfile::tempdir().unwrap();
  write_resource(
    dir.path(),
    "limits.yaml",
    "params:\n  ratio: 2.0\n  big: 12345678901234567890\n  mask: \"0x1F\"\n",
  );
  let plugins = Plugins::new();
  let mut container = Container::new();

  FileConfigurator::new("limits.yaml", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap();

  assert_eq!(container.get_setting("ratio"), Some("2.0"));
  assert_eq!(container.get_setting("big"), Some("12345678901234567890"));
  assert_eq!(container.get_setting("mask"), Some("0x1F"));
}

#[test]
fn test_json_resource_is_parsed_as_json() {
  let dir = tempfile::tempdir().unwrap();
  write_resource(dir.path(), "remoting.json", r#"{"params": {"scriptCompressed": true}}"#);
  let plugins = Plugins::new();
  let mut container = Container::new();

  FileConfigurator::new("remoting.json", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap();

  assert_eq!(container.get_setting("scriptCompressed"), Some("true"));
}

#[test]
fn test_missing_resource_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  let plugins = Plugins::new();
  let mut container = Container::new();

  let err = FileConfigurator::new("nowhere.yaml", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap_err();

  assert!(matches!(err, Error::ResourceNotFound(_)));
}

#[test]
fn test_malformed_resource_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  write_resource(dir.path(), "broken.yaml", "params: [this is: not a map\n");
  let plugins = Plugins::new();
  let mut container = Container::new();

  let err = FileConfigurator::new("broken.yaml", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap_err();

  assert!(matches!(err, Error::ConfigParse { ref resource, .. } if resource == "broken.yaml"));
}

#[test]
fn test_unknown_bean_fails_without_partial_bindings() {
  // Arrange
  let dir = tempfile::tempdir().unwrap();
  write_resource(
    dir.path(),
    "partial.yaml",
    "params:\n  debug: true\nbeans:\n  Remoter: NoSuchRemoter\n",
  );
  let plugins = Plugins::new();
  let mut container = Container::new();
  container.add_parameter("debug", "false");

  // Act
  let err = FileConfigurator::new("partial.yaml", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap_err();

  // Assert
  assert!(matches!(err, Error::PluginNotFound(ref id) if id == "NoSuchRemoter"));
  assert_eq!(container.get_setting("debug"), Some("false"));
  assert!(!container.contains("Remoter"));
}

#[test]
fn test_bean_identifier_bound_to_configurator_is_a_kind_mismatch() {
  let dir = tempfile::tempdir().unwrap();
  write_resource(dir.path(), "mismatch.yaml", "beans:\n  Remoter: Audit\n");
  let plugins = Plugins::new();
  plugins.register_configurator("Audit", || {
    |_: &mut Container| Ok::<_, Error>(())
  });
  let mut container = Container::new();

  let err = FileConfigurator::new("mismatch.yaml", context(dir.path()), &plugins)
    .configure(&mut container)
    .unwrap_err();

  assert!(matches!(err, Error::PluginKindMismatch { .. }));
}

// --- Custom Configurator ---

#[test]
fn test_custom_configurator_is_applied() {
  let plugins = Plugins::new();
  plugins.register_configurator("Audit", || {
    |container: &mut Container| {
      container.add_parameter("audit", "on");
      Ok::<_, Error>(())
    }
  });
  let mut container = Container::new();

  CustomConfigurator::new("Audit", &plugins)
    .configure(&mut container)
    .unwrap();

  assert_eq!(container.get_setting("audit"), Some("on"));
}

#[test]
fn test_custom_configurator_failures_are_logged_not_returned() {
  // Arrange
  let plugins = Plugins::new();
  plugins.register_bean("JustABean", || Instance::new(5u32));
  plugins.register_configurator("Failing", || {
    |_: &mut Container| -> fibre_bootstrap::Result<()> {
      Err(Error::configurator("Failing", "database unreachable"))
    }
  });
  plugins.register_configurator("Panicking", || {
    |container: &mut Container| -> fibre_bootstrap::Result<()> {
      container.add_parameter("halfway", "yes");
      panic!("boom")
    }
  });
  let (diagnostics, logs) = capture(LevelFilter::WARN);
  let mut container = Container::new();

  // Act
  for id in ["com.example.Missing", "JustABean", "Failing", "Panicking"] {
    let result = diagnostics.scope(|| CustomConfigurator::new(id, &plugins).configure(&mut container));
    assert!(result.is_ok(), "{} was not isolated", id);
  }

  // Assert
  let output = logs.contents();
  assert_eq!(output.matches("Failed to start custom configurator").count(), 4);
  assert!(output.contains("com.example.Missing"));
  assert!(output.contains("database unreachable"));
  assert!(output.contains("boom"));
  // Whatever ran before the panic stays applied.
  assert_eq!(container.get_setting("halfway"), Some("yes"));
}
