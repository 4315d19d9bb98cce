/*!

# An Opaque Value Type

[`Widget`] is a value type whose state nobody outside this module can see. Its only field is
a [`Pimpl`] pointing at a private `WidgetImpl` defined in a private submodule. Downstream
code can use a `Widget` as an ordinary value, but it cannot name `WidgetImpl` or depend on
its fields.

## The Compilation Firewall, Rust Edition

In C++ the pimpl idiom exists mostly to stop changes to private members from forcing every
file that includes the header to recompile. Rust compiles a whole crate at a time, so that
motivation mostly disappears. Two others remain:

1. _API stability._ Private fields are already invisible in Rust, but a private field of a
   public type still affects the type's size, alignment, auto traits (`Send`, `Sync`,
   `Unpin`), and whether it is `Copy`. Putting everything behind a `Box` pins the layout to
   a single pointer no matter how the representation changes.
2. _Cheap moves._ Moving a `Widget` copies one pointer, whatever the size of its state.

## Two Variants, One Type

A plain widget with no interesting state and a widget carrying an integer counter are the
same type here. [`Widget::new`] gives a counter of zero and [`Widget::with_info`] takes one.

## Moved-from Widgets

A plain Rust move needs no support from us. [`Widget::take`] and [`Widget::move_from`]
provide C++-style moves that leave the source behind, empty. An empty widget may still be
dropped or reassigned. [`Widget::info`] panics on it, and [`Widget::try_info`] returns
[`PimplError::MovedFrom`].

*/

use std::{
    fmt::{self, Debug, Formatter},
    io::{self, Write},
};

use tracing::debug;

use crate::{error::PimplError, hashing, pimpl::Pimpl};

mod implementation;

use implementation::WidgetImpl;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Widget {
    pimpl: Pimpl<WidgetImpl>,
}

impl Widget {
    /// A widget whose counter is zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A widget whose counter starts at `info`.
    pub fn with_info(info: i32) -> Self {
        Self {
            pimpl: Pimpl::new(WidgetImpl::with_info(info)),
        }
    }

    /// Moves this widget's state into a new widget, leaving `self` moved-from.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            pimpl: self.pimpl.take(),
        }
    }

    /// Drops this widget's state and takes over `other`'s, leaving `other` moved-from.
    pub fn move_from(&mut self, other: &mut Self) {
        self.pimpl.move_from(&mut other.pimpl);
    }

    pub fn is_moved_from(&self) -> bool {
        self.pimpl.is_empty()
    }

    /// The counter.
    ///
    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn info(&self) -> i32 {
        self.try_info().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_info(&self) -> Result<i32, PimplError> {
        Ok(self.state()?.info())
    }

    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn set_info(&mut self, info: i32) {
        self.state_mut().set_info(info);
    }

    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn name(&self) -> &str {
        self.expect_state().name()
    }

    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state_mut().set_name(name.into());
    }

    /// Appends a sample to the widget's hidden data.
    ///
    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn push_data(&mut self, value: f64) {
        self.state_mut().push_data(value);
    }

    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn data_len(&self) -> usize {
        self.expect_state().data_len()
    }

    /// Writes the counter followed by a newline.
    ///
    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn write_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.info())
    }

    /// Prints the counter to stdout.
    ///
    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn print_info(&self) -> io::Result<()> {
        debug!(info = self.info(), "printing widget info");
        self.write_info(&mut io::stdout().lock())
    }

    /// A fingerprint of the widget's whole hidden state. See [`hashing`].
    ///
    /// # Panics
    ///
    /// Panics if the widget has been moved from.
    pub fn fingerprint(&self) -> u128 {
        hashing::fingerprint(self.expect_state())
    }

    fn state(&self) -> Result<&WidgetImpl, PimplError> {
        self.pimpl.try_get().map_err(|_| Self::moved_from())
    }

    fn expect_state(&self) -> &WidgetImpl {
        self.state().unwrap_or_else(|err| panic!("{err}"))
    }

    fn state_mut(&mut self) -> &mut WidgetImpl {
        self.pimpl
            .try_get_mut()
            .unwrap_or_else(|_| panic!("{}", Self::moved_from()))
    }

    // Reported under the public name so the private type's path never shows up.
    fn moved_from() -> PimplError {
        PimplError::MovedFrom { type_name: "Widget" }
    }
}

impl Debug for Widget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.pimpl.try_get() {
            Ok(state) => f
                .debug_struct("Widget")
                .field("info", &state.info())
                .finish_non_exhaustive(),
            Err(_) => f.write_str("Widget(<moved-from>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use test_log::test;

    use super::*;

    #[test]
    fn new_widget_has_default_info() {
        let w = Widget::new();
        assert!(!w.is_moved_from());
        assert_eq!(w.info(), 0);
        assert_eq!(w.name(), "");
        assert_eq!(w.data_len(), 0);
        assert_eq!(w, Widget::default());
    }

    #[test]
    fn with_info_keeps_constructor_argument() {
        assert_eq!(Widget::with_info(42).info(), 42);
        assert_eq!(Widget::with_info(-3).info(), -3);
    }

    #[test]
    fn copy_move_scenario() {
        let mut w = Widget::with_info(42);
        assert_eq!(w.info(), 42);

        let mut w2 = w.clone();
        assert_eq!(w2.info(), 42);
        w.set_info(7);
        assert_eq!(w2.info(), 42);
        assert_eq!(w.info(), 7);

        let w3 = w2.take();
        assert_eq!(w3.info(), 42);
        assert!(w2.is_moved_from());
    }

    #[test]
    fn copies_do_not_share_hidden_state() {
        let mut a = Widget::with_info(1);
        a.set_name("a");
        a.push_data(0.5);

        let mut b = a.clone();
        b.set_name("b");
        b.push_data(1.5);

        assert_eq!(a.name(), "a");
        assert_eq!(a.data_len(), 1);
        assert_eq!(b.name(), "b");
        assert_eq!(b.data_len(), 2);
    }

    #[test]
    fn clone_from_overwrites_target() {
        let source = Widget::with_info(5);
        let mut target = Widget::with_info(9);
        target.set_name("old");
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.name(), "");
    }

    #[test]
    fn native_move_preserves_state() {
        let mut a = Widget::with_info(11);
        a.set_name("moved");
        let before = a.fingerprint();
        let b = a;
        assert_eq!(b.fingerprint(), before);
        assert_eq!(b.name(), "moved");
    }

    #[test]
    fn move_assign_transfers_state() {
        let mut target = Widget::with_info(1);
        let mut source = Widget::with_info(2);
        source.push_data(3.0);

        target.move_from(&mut source);
        assert_eq!(target.info(), 2);
        assert_eq!(target.data_len(), 1);
        assert!(source.is_moved_from());
    }

    #[test]
    fn moves_of_moved_from_widgets_succeed() {
        let mut a = Widget::with_info(1);
        let mut b = a.take();
        let c = a.take();
        assert!(c.is_moved_from());

        a.move_from(&mut b);
        assert_eq!(a.info(), 1);

        let mut empty = Widget::new();
        let _ = empty.take();
        b.move_from(&mut empty);
        assert!(b.is_moved_from());
        assert!(empty.is_moved_from());
    }

    #[test]
    fn moved_from_widget_can_be_reassigned() {
        let mut a = Widget::with_info(4);
        let _b = a.take();
        a = Widget::with_info(8);
        assert_eq!(a.info(), 8);

        let source = Widget::with_info(6);
        let mut c = a.take();
        assert_eq!(c.info(), 8);
        a.clone_from(&source);
        assert_eq!(a.info(), 6);
        c.move_from(&mut a);
        assert_eq!(c.info(), 6);
    }

    #[test]
    fn try_info_reports_moved_from() {
        let mut a = Widget::new();
        let _b = a.take();
        let err = a.try_info().unwrap_err();
        assert_eq!(err, PimplError::MovedFrom { type_name: "Widget" });
        assert_eq!(err.to_string(), "Widget accessed after being moved from");
    }

    #[test]
    #[should_panic(expected = "Widget accessed after being moved from")]
    fn info_panics_when_moved_from() {
        let mut a = Widget::with_info(1);
        let _b = a.take();
        a.info();
    }

    #[test]
    #[should_panic(expected = "Widget accessed after being moved from")]
    fn setter_panics_when_moved_from() {
        let mut a = Widget::with_info(1);
        let _b = a.take();
        a.set_info(2);
    }

    #[test]
    fn fingerprint_tracks_hidden_state() {
        let mut a = Widget::with_info(3);
        a.push_data(0.25);
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());

        a.push_data(0.5);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn write_info_emits_counter_line() {
        let mut out = Vec::new();
        Widget::with_info(42).write_info(&mut out).unwrap();
        Widget::new().write_info(&mut out).unwrap();
        assert_eq!(out, b"42\n0\n");
    }

    #[test]
    fn print_info_writes_to_stdout() {
        Widget::with_info(42).print_info().unwrap();
    }

    #[test]
    #[should_panic(expected = "Widget accessed after being moved from")]
    fn print_info_panics_when_moved_from() {
        let mut a = Widget::with_info(1);
        let _b = a.take();
        let _ = a.print_info();
    }

    #[test]
    fn nan_sample_survives_copy() {
        let mut a = Widget::with_info(1);
        a.push_data(f64::NAN);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn signed_zeros_are_distinct_samples() {
        let mut a = Widget::new();
        let mut b = Widget::new();
        a.push_data(0.0);
        b.push_data(-0.0);
        assert_ne!(a, b);
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = Widget::new();
        c.push_data(0.0);
        assert_eq!(a, c);
        assert_eq!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn debug_hides_representation() {
        let mut a = Widget::with_info(2);
        a.set_name("secret");
        assert_eq!(format!("{a:?}"), "Widget { info: 2, .. }");

        let _b = a.take();
        assert_eq!(format!("{a:?}"), "Widget(<moved-from>)");
    }

    #[test]
    fn widget_is_one_pointer_wide() {
        assert_eq!(size_of::<Widget>(), size_of::<usize>());
    }
}
