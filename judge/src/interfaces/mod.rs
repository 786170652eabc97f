pub mod picker {
    /// Source of candidate tickets. Anything it returns is validated before a ticket is made from it.
    pub trait NumberPicker{
        fn pick(&mut self) -> Vec<i64>;
    }

    impl<F> NumberPicker for F where F: FnMut() -> Vec<i64> {
        fn pick(&mut self) -> Vec<i64> {
            self()
        }
    }
}
