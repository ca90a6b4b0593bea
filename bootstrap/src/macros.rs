//! Public macros for building container instances.

/// Builds an [`Instance`](crate::Instance) from a value.
///
/// The `trait` form wraps the value as a trait object while keeping the
/// concrete type name for diagnostics, so the bean can be resolved as
/// `dyn Trait` and still be reported as its real type.
///
/// # Examples
///
/// ```
/// use fibre_bootstrap::{instance, Container};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let mut container = Container::new();
/// container.add_instance("Greeter", instance!(trait Greeter, EnglishGreeter));
///
/// let greeter = container.get_bean::<dyn Greeter>("Greeter").unwrap();
/// assert_eq!(greeter.greet(), "Hello!");
/// assert!(container
///   .get_binding("Greeter")
///   .unwrap()
///   .type_name()
///   .ends_with("EnglishGreeter"));
/// ```
#[macro_export]
macro_rules! instance {
    // Arm for a trait object: instance!(trait MyTrait, value)
    // `:ident` rather than `:path`, since `dyn $path` does not parse reliably.
    (trait $trait_ident:ident, $value:expr) => {{
        fn __concrete_type_name<T>(_: &T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let value = $value;
        let concrete_type = __concrete_type_name(&value);
        $crate::Instance::from_trait::<dyn $trait_ident>(::std::sync::Arc::new(value), concrete_type)
    }};

    // Arm for a concrete value: instance!(value)
    ($value:expr) => {
        $crate::Instance::new($value)
    };
}
