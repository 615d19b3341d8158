//! Shared state for the views: the inventory and the definition registry.
use minigames_core::{CellKind, GemName, Inventory, Registry, TreeYield};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InventoryState {
    pub inventory: Inventory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryAction {
    /// A mine cell was struck.
    Mined(CellKind<GemName>),
    /// A tree was chopped.
    Chopped(CellKind<TreeYield>),
    AddWood(u32),
    AddFruit(u32),
    Reset,
}

impl Reducible for InventoryState {
    type Action = InventoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InventoryAction::Mined(kind) => next.inventory.add_mined(kind),
            InventoryAction::Chopped(kind) => next.inventory.add_chopped(kind),
            InventoryAction::AddWood(count) => next.inventory.add_wood(count),
            InventoryAction::AddFruit(count) => next.inventory.add_fruit(count),
            InventoryAction::Reset => {
                if self.inventory.is_empty() {
                    return self;
                }
                next.inventory.reset();
            }
        }
        Rc::new(next)
    }
}

pub type InventoryHandle = UseReducerHandle<InventoryState>;

/// Shared, mutable registry. Equality is identity so context consumers only
/// re-render when the registry itself is swapped.
#[derive(Clone, Debug)]
pub struct RegistryHandle(Rc<RefCell<Registry>>);

impl RegistryHandle {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self(Rc::new(RefCell::new(registry)))
    }

    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Registry> {
        self.0.borrow()
    }

    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, Registry> {
        self.0.borrow_mut()
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::new(Registry::seeded())
    }
}

impl PartialEq for RegistryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    /// Registry to share; a seeded one is created when absent.
    #[prop_or_default]
    pub registry: Option<RegistryHandle>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let inventory = use_reducer(InventoryState::default);
    let registry = {
        let given = props.registry.clone();
        use_memo((), move |_| given.unwrap_or_default())
    };

    html! {
        <ContextProvider<RegistryHandle> context={(*registry).clone()}>
            <ContextProvider<InventoryHandle> context={inventory}>
                { props.children.clone() }
            </ContextProvider<InventoryHandle>>
        </ContextProvider<RegistryHandle>>
    }
}

/// Inventory from the nearest [`StoreProvider`].
///
/// # Panics
///
/// Panics when rendered outside a [`StoreProvider`].
#[hook]
pub fn use_inventory() -> InventoryHandle {
    use_context::<InventoryHandle>().expect("StoreProvider must wrap inventory consumers")
}

/// Registry from the nearest [`StoreProvider`].
///
/// # Panics
///
/// Panics when rendered outside a [`StoreProvider`].
#[hook]
pub fn use_registry() -> RegistryHandle {
    use_context::<RegistryHandle>().expect("StoreProvider must wrap registry consumers")
}
