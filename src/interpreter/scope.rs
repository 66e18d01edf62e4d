use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::ast::FunctionDef;

/// One level of the scope stack.
///
/// Variables and functions live in separate maps, but a level always carries
/// both so the two stacks grow and shrink together.
#[derive(Default)]
struct Level {
    variables: RefCell<BTreeMap<String, String>>,
    functions: RefCell<BTreeMap<String, Rc<FunctionDef>>>,
    parent:    Option<Rc<Level>>,
}

/// A stack of variable and function levels.
///
/// Levels are shared, not copied: a sub-scope links to its parent's levels,
/// so updates made through the sub-scope to a name bound further out are
/// visible to the parent. Cloning a `Scope` clones the handle, not the data.
///
/// ## Binding rule
///
/// Setting a name updates the outermost level that already binds it. If no
/// level does, the binding is created in the innermost level only.
///
/// ```
/// use hellm::interpreter::scope::Scope;
///
/// let outer = Scope::new();
/// outer.set("x", "1");
///
/// let inner = outer.sub_scope();
/// inner.set("x", "2");
/// inner.set("y", "3");
///
/// assert_eq!(outer.get("x").as_deref(), Some("2"));
/// assert_eq!(outer.get("y"), None);
/// assert_eq!(inner.get("y").as_deref(), Some("3"));
/// ```
#[derive(Clone, Default)]
pub struct Scope {
    innermost: Rc<Level>,
}

impl Scope {
    /// Creates a root scope with a single empty level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope with one new, empty level on top of this one.
    ///
    /// All existing levels stay reachable and mutable through the new scope.
    #[must_use]
    pub fn sub_scope(&self) -> Self {
        Self { innermost: Rc::new(Level { parent: Some(Rc::clone(&self.innermost)),
                                          ..Level::default() }), }
    }

    /// Creates the fresh scope a function body runs in.
    ///
    /// The new scope has a single level holding no variables and a copy of
    /// every function visible from `self`. Inner definitions win over outer
    /// ones with the same name.
    #[must_use]
    pub fn for_call(&self) -> Self {
        let fresh = Self::new();
        {
            let mut functions = fresh.innermost.functions.borrow_mut();
            for level in self.levels() {
                for (name, def) in level.functions.borrow().iter() {
                    functions.insert(name.clone(), Rc::clone(def));
                }
            }
        }
        fresh
    }

    /// Returns the levels outermost first.
    fn levels(&self) -> Vec<&Level> {
        let mut levels = Vec::new();
        let mut current = Some(&self.innermost);
        while let Some(level) = current {
            levels.push(level.as_ref());
            current = level.parent.as_ref();
        }
        levels.reverse();
        levels
    }

    /// Binds `name` to `value` following the binding rule.
    pub fn set(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        for level in self.levels() {
            if let Some(slot) = level.variables.borrow_mut().get_mut(name) {
                *slot = value;
                return;
            }
        }
        self.innermost
            .variables
            .borrow_mut()
            .insert(name.to_string(), value);
    }

    /// Looks up a variable's current value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.levels()
            .into_iter()
            .find_map(|level| level.variables.borrow().get(name).cloned())
    }

    /// Returns `true` if any level binds the variable.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.levels()
            .into_iter()
            .any(|level| level.variables.borrow().contains_key(name))
    }

    /// Removes a variable from the first level that binds it.
    ///
    /// # Returns
    /// The removed value, or `None` if the variable was not in scope.
    pub fn remove(&self, name: &str) -> Option<String> {
        self.levels()
            .into_iter()
            .find_map(|level| level.variables.borrow_mut().remove(name))
    }

    /// Registers a function following the binding rule.
    pub fn set_function(&self, def: FunctionDef) {
        let def = Rc::new(def);
        for level in self.levels() {
            if let Some(slot) = level.functions.borrow_mut().get_mut(&def.name) {
                *slot = def;
                return;
            }
        }
        self.innermost
            .functions
            .borrow_mut()
            .insert(def.name.clone(), def);
    }

    /// Looks up a function definition by name.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.levels()
            .into_iter()
            .find_map(|level| level.functions.borrow().get(name).cloned())
    }

    /// Returns every visible variable binding, outermost level first and in
    /// name order within a level.
    #[must_use]
    pub fn variables(&self) -> Vec<(String, String)> {
        self.levels()
            .into_iter()
            .flat_map(|level| {
                level.variables
                     .borrow()
                     .iter()
                     .map(|(k, v)| (k.clone(), v.clone()))
                     .collect::<Vec<_>>()
            })
            .collect()
    }
}
