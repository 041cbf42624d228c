use crate::run::Step;
use crate::traits::SearchAlgorithm;

/// Iterator over the remaining steps of a run.
///
/// Yields one [`Step`] per unit of work and ends after the step that
/// finishes the run. A run that is already finished yields nothing.
pub struct Steps<'a, A: SearchAlgorithm + ?Sized> {
    search: &'a mut A,
    done: bool,
}

impl<'a, A: SearchAlgorithm + ?Sized> Steps<'a, A> {
    pub fn new(search: &'a mut A) -> Self {
        let done = search.status().is_finished();
        Self { search, done }
    }
}

impl<A: SearchAlgorithm + ?Sized> Iterator for Steps<'_, A> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        let step = self.search.step();
        self.done = step.finished;
        Some(step)
    }
}
