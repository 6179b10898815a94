//! Item container generation.
//!
//! An items control shows each entry of a collection inside a container
//! element. This module splits that job three ways:
//!
//! - [`ItemsOwner`]: the control. Creates containers and binds items to them.
//! - [`ItemContainerGenerator`]: a stateless protocol checker that forwards
//!   to the owner.
//! - [`RealizedContainers`]: the panel. Tracks which containers are realized
//!   at which index and recycles the rest.
//!
//! [`ItemsPresenter`] ties an owner, its items and a panel together.

mod container;
mod generator;
mod owner;
mod panel;


pub use container::{Container, ContainerPhase};
pub use generator::ItemContainerGenerator;
pub use owner::ItemsOwner;
pub use panel::{ItemsPresenter, RealizedContainers};
