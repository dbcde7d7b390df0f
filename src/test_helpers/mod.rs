pub mod rand {
    use crate::rand::Random;
    use std::cell::RefCell;

    /// Replays a scripted sequence of raw draws
    #[derive(Debug, Default)]
    pub struct FakeRandom {
        random_sequence: RefCell<Vec<u64>>,
    }

    impl FakeRandom {
        pub fn with_random_sequence(self, sequence: Vec<u64>) -> Self {
            self.random_sequence.replace(sequence);
            self.random_sequence.borrow_mut().reverse();
            self
        }

        pub fn is_exhausted(&self) -> bool {
            self.random_sequence.borrow().is_empty()
        }
    }

    impl Random for FakeRandom {
        fn next_u64(&self) -> u64 {
            self.random_sequence
                .borrow_mut()
                .pop()
                .expect("should not be empty")
        }
    }
}
