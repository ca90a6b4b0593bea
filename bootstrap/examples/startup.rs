use fibre_bootstrap::{
  global, instance, Bootstrap, Capability, Container, HostConfig, HostContext, InitParams,
};
use std::sync::Arc;

// 1. A capability implementation the framework can plug in.
trait AccessControl: Send + Sync {
  fn allows(&self, method: &str) -> bool;
}

struct DenyAdmin;
impl AccessControl for DenyAdmin {
  fn allows(&self, method: &str) -> bool {
    !method.starts_with("admin")
  }
}

fn main() -> fibre_bootstrap::Result<()> {
  // --- Registration ---

  // Identifiers written in configuration resolve against the global registry.
  global().register_bean("DenyAdmin", || instance!(trait AccessControl, DenyAdmin));
  global().register_configurator("Banner", || {
    |container: &mut Container| -> fibre_bootstrap::Result<()> {
      container.add_parameter("banner", "Welcome");
      Ok(())
    }
  });

  // --- Host ---

  // What a servlet container would hand us: init params and a shared context.
  let params = InitParams::new()
    .with("debug", "true")
    .with("AccessControl", "DenyAdmin")
    .with("customConfigurator", "Banner")
    .with("publishContainerAs", "remoting.container")
    .with("logLevel", "debug");
  let context = Arc::new(HostContext::new("example server"));
  let config = HostConfig::new("remoting", params, Arc::clone(&context));

  // --- Startup ---
  let container = Bootstrap::new(config).run()?;

  let access = container
    .get_bean::<dyn AccessControl>(Capability::AccessControl.name())
    .expect("DenyAdmin was resolved");
  println!("debug = {}", container.flag("debug"));
  println!("banner = {:?}", container.get_setting("banner"));
  println!("may call admin.reset: {}", access.allows("admin.reset"));

  // Components without a handle on the bootstrap find it via the context.
  let published = context
    .attribute("remoting.container")
    .and_then(|attribute| attribute.downcast::<Container>())
    .expect("container was published");
  println!("published the same container: {}", Arc::ptr_eq(&published, &container));

  Ok(())
}
