use fibre_bootstrap::{instance, Binding, Container, Instance, Plugins};
use std::sync::Arc;

// --- Test Fixtures ---

trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

#[derive(Debug, PartialEq, Eq)]
struct SimpleService {
  id: u32,
}

// --- Registry Tests ---

#[test]
fn test_last_write_wins_without_merging() {
  // Arrange
  let mut container = Container::new();

  // Act
  container.add_parameter("X", "first");
  container.add_instance("X", Instance::new(SimpleService { id: 7 }));
  container.add_parameter("X", "third");

  // Assert
  assert_eq!(container.len(), 1);
  assert_eq!(container.get_setting("X"), Some("third"));
  assert!(container.get_bean::<SimpleService>("X").is_none());
}

#[test]
fn test_missing_binding_is_none() {
  let container = Container::new();
  assert!(container.get_binding("AccessControl").is_none());
  assert!(container.get_setting("debug").is_none());
  assert!(!container.flag("debug"));
  assert!(container.is_empty());
}

#[test]
fn test_names_keep_first_registration_order_and_restart() {
  // Arrange
  let mut container = Container::new();
  container.add_parameter("b", "1");
  container.add_parameter("a", "2");
  container.add_parameter("c", "3");
  container.add_parameter("b", "overwritten");

  // Act
  let names = container.names();
  let first: Vec<&str> = names.clone().collect();
  let second: Vec<&str> = names.collect();

  // Assert
  assert_eq!(first, vec!["b", "a", "c"]);
  assert_eq!(first, second);
}

#[test]
fn test_concrete_bean_keeps_pointer_identity() {
  // Arrange
  let service = Arc::new(SimpleService { id: 101 });
  let mut container = Container::new();
  container.add_instance("service", Instance::from_arc(Arc::clone(&service)));

  // Act
  let r1 = container.get_bean::<SimpleService>("service").unwrap();
  let r2 = container.get_bean::<SimpleService>("service").unwrap();

  // Assert
  assert_eq!(r1.id, 101);
  assert!(Arc::ptr_eq(&r1, &service));
  assert!(Arc::ptr_eq(&r1, &r2));
}

#[test]
fn test_trait_bean_resolves_as_trait_and_reports_concrete_type() {
  // Arrange
  let mut container = Container::new();
  container.set_binding("Greeter", instance!(trait Greeter, EnglishGreeter));

  // Act
  let greeter = container.get_bean::<dyn Greeter>("Greeter").unwrap();
  let binding = container.get_binding("Greeter").unwrap();

  // Assert
  assert_eq!(greeter.greet(), "Hello!");
  assert!(binding.type_name().ends_with("EnglishGreeter"));
  // Registered as a trait object, so the concrete type does not resolve.
  assert!(container.get_bean::<EnglishGreeter>("Greeter").is_none());
}

#[test]
fn test_setting_is_not_a_bean() {
  let mut container = Container::new();
  container.add_parameter("debug", "TRUE");

  assert!(container.flag("debug"));
  assert!(container.get_bean::<String>("debug").is_none());
  assert!(matches!(container.get_binding("debug"), Some(Binding::Setting(v)) if v == "TRUE"));
}

#[test]
fn test_resolve_beans_only_touches_known_identifiers() {
  // Arrange
  let plugins = Plugins::new();
  plugins.register_bean("SimpleServiceImpl", || Instance::new(SimpleService { id: 9 }));
  plugins.register_configurator("NotABean", || {
    |_: &mut Container| Ok::<_, fibre_bootstrap::Error>(())
  });

  let mut container = Container::new();
  container.add_parameter("Service", "SimpleServiceImpl");
  container.add_parameter("debug", "false");
  container.add_parameter("Other", "NotABean");

  // Act
  let resolved = container.resolve_beans(&plugins);

  // Assert
  assert_eq!(resolved, 1);
  assert_eq!(container.get_bean::<SimpleService>("Service").unwrap().id, 9);
  assert_eq!(container.get_setting("debug"), Some("false"));
  assert_eq!(container.get_setting("Other"), Some("NotABean"));
  // Already resolved bindings are left alone.
  assert_eq!(container.resolve_beans(&plugins), 0);
}

#[test]
fn test_frozen_container_is_shared_across_threads() {
  let mut container = Container::new();
  container.add_parameter("debug", "true");
  let container = Arc::new(container);

  std::thread::scope(|s| {
    for _ in 0..8 {
      let container = Arc::clone(&container);
      s.spawn(move || {
        assert!(container.flag("debug"));
      });
    }
  });
}
