// Progress reporting seam
// The engine reports chunks and files here; implementations only observe

/// Observer for long running work
pub trait Progress {
    /// Start a unit of work with `total` steps
    fn begin(&mut self, total: u64, label: &str);

    /// One step done
    fn advance(&mut self);

    /// Work finished or abandoned
    fn end(&mut self);
}

/// Progress observer that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn begin(&mut self, _total: u64, _label: &str) {}

    fn advance(&mut self) {}

    fn end(&mut self) {}
}
