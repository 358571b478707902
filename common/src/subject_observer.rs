use std::rc::Rc;

use log::debug;

pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E) -> Result<(), S::Error>;
}

pub trait Subject<E: Clone>: Sized {
    type Error;

    fn attach(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn detach(&mut self, observer: &Rc<dyn Observer<Self, E>>);
    fn notify(&self, event: E) -> Result<(), Self::Error>;
}

pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;

/// Ordered observer registry with set semantics on identity.
///
/// Subjects embed one and forward `attach`/`detach`/`notify` to it.
pub struct ObserverList<S: Subject<E>, E: Clone> {
    observers: SharedObservers<S, E>,
}

impl<S: Subject<E>, E: Clone> Default for ObserverList<S, E> {
    fn default() -> Self {
        Self { observers: vec![] }
    }
}

impl<S, E> ObserverList<S, E>
where
    S: Subject<E>,
    E: Clone,
{
    pub fn attach(&mut self, observer: Rc<dyn Observer<S, E>>) -> bool {
        if self.contains(&observer) {
            debug!("Observer already attached, ignoring");
            return false;
        }
        self.observers.push(observer);
        debug!("Observer attached ({} total)", self.observers.len());
        true
    }

    pub fn detach(&mut self, observer: &Rc<dyn Observer<S, E>>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|obs| !same_observer(obs, observer));
        let removed = self.observers.len() != before;
        if removed {
            debug!("Observer detached ({} left)", self.observers.len());
        }
        removed
    }

    /// Stops at the first failing observer and hands its error back.
    pub fn notify(&self, source: &S, event: E) -> Result<(), S::Error> {
        for obs in &self.observers {
            obs.update(source, event.clone())?;
        }
        Ok(())
    }

    pub fn contains(&self, observer: &Rc<dyn Observer<S, E>>) -> bool {
        self.observers.iter().any(|obs| same_observer(obs, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

// Compare data pointers only: vtable addresses are not guaranteed unique.
fn same_observer<S, E>(a: &Rc<dyn Observer<S, E>>, b: &Rc<dyn Observer<S, E>>) -> bool
where
    S: Subject<E>,
    E: Clone,
{
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
