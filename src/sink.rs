//! Command channel for feeding the widget from non-UI code.
//!
//! Commands are queued on an `mpsc` channel and applied on the UI thread by
//! [`IngestionController::apply_commands`](crate::ingest::IngestionController::apply_commands),
//! so the store is still only ever touched from one thread.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::{Point, Series};

/// Messages sent over the channel to drive the widget.
#[derive(Debug, Clone)]
pub enum DataCommand {
    /// Append a single point.
    Point(Point),
    /// Replace the entire series with the provided points.
    SetData(Series),
    /// Load a CSV file; same semantics as a file picked in the UI.
    LoadCsv(PathBuf),
    /// Remove every point.
    Clear,
}

/// Cloneable sender for [`DataCommand`]s.
#[derive(Clone)]
pub struct DataSink {
    tx: Sender<DataCommand>,
}

impl DataSink {
    /// Append an `(x, y)` pair.
    pub fn send_point(&self, x: f64, y: f64) -> Result<(), SendError<DataCommand>> {
        self.tx.send(DataCommand::Point(Point::new(x, y)))
    }

    /// Replace all data with `points`.
    pub fn set_data<I>(&self, points: I) -> Result<(), SendError<DataCommand>>
    where
        I: IntoIterator<Item = Point>,
    {
        self.tx.send(DataCommand::SetData(points.into_iter().collect()))
    }

    /// Request a CSV load.
    pub fn load_csv<P: Into<PathBuf>>(&self, path: P) -> Result<(), SendError<DataCommand>> {
        self.tx.send(DataCommand::LoadCsv(path.into()))
    }

    pub fn clear(&self) -> Result<(), SendError<DataCommand>> {
        self.tx.send(DataCommand::Clear)
    }
}

/// Create a new sink/receiver pair.
pub fn channel_data() -> (DataSink, Receiver<DataCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (DataSink { tx }, rx)
}
