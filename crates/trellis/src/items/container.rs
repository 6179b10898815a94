//! Per-container protocol state.

/// Where a container is in the prepare/clear protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerPhase {
    /// Created and not yet bound to an item.
    Created,
    /// Bound to an item, not yet announced as prepared.
    Prepared,
    /// Bound and announced. The normal state of a realized container.
    Live,
    /// Unbound and ready to be prepared for another item.
    Cleared,
}

/// A container element together with its protocol state.
///
/// Owned by the panel. The generator only checks and advances the state.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<E> {
    element: E,
    phase: ContainerPhase,
    own_container: bool,
    ever_prepared: bool,
    index: Option<usize>,
    hidden: bool,
}

impl<E> Container<E> {
    pub(crate) fn created(element: E) -> Self {
        Self {
            element,
            phase: ContainerPhase::Created,
            own_container: false,
            ever_prepared: false,
            index: None,
            hidden: false,
        }
    }

    pub(crate) fn own(element: E) -> Self {
        Self {
            own_container: true,
            ..Self::created(element)
        }
    }

    /// The container element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Consume the container, returning its element.
    pub fn into_element(self) -> E {
        self.element
    }

    /// The protocol phase.
    pub fn phase(&self) -> ContainerPhase {
        self.phase
    }

    /// Whether the element is the item itself.
    pub fn is_own_container(&self) -> bool {
        self.own_container
    }

    /// Whether the container has ever been prepared.
    pub fn was_prepared(&self) -> bool {
        self.ever_prepared
    }

    /// The index the container is, or was last, bound to.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether the panel has hidden the container.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_phase(&mut self, phase: ContainerPhase) {
        if phase == ContainerPhase::Prepared {
            self.ever_prepared = true;
        }
        self.phase = phase;
    }

    pub(crate) fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_containers_start_created() {
        let wrapped = Container::created(1_u32);
        let own = Container::own(2_u32);

        assert_eq!(wrapped.phase(), ContainerPhase::Created);
        assert!(!wrapped.is_own_container());
        assert!(own.is_own_container());
        assert!(!own.was_prepared());
        assert_eq!(own.index(), None);
    }

    #[test]
    fn preparing_is_remembered() {
        let mut container = Container::created(1_u32);
        container.set_phase(ContainerPhase::Prepared);
        container.set_phase(ContainerPhase::Live);
        container.set_phase(ContainerPhase::Cleared);

        assert!(container.was_prepared());
        assert_eq!(container.into_element(), 1);
    }
}
