//! Console port — where user-facing text goes.

/// Text sink for everything the home reports.
///
/// Implementations absorb their own write failures; nothing reported
/// through a console can fail the caller.
pub trait Console {
    /// Write `text` as-is, without a newline.
    fn print(&mut self, text: &str);

    /// Write `line` followed by a newline.
    fn println(&mut self, line: &str) {
        self.print(line);
        self.print("\n");
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn print(&mut self, text: &str) {
        (**self).print(text);
    }

    fn println(&mut self, line: &str) {
        (**self).println(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(String);

    impl Console for Recorder {
        fn print(&mut self, text: &str) {
            self.0.push_str(text);
        }
    }

    #[test]
    fn should_append_newline_in_default_println() {
        let mut rec = Recorder::default();
        rec.println("hello");
        rec.print("world");
        assert_eq!(rec.0, "hello\nworld");
    }

    fn emit(mut console: impl Console) {
        console.println("a");
        console.print("b");
    }

    #[test]
    fn should_forward_through_mutable_reference() {
        let mut rec = Recorder::default();
        emit(&mut rec);
        assert_eq!(rec.0, "a\nb");
    }
}
