#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::io::Write;
use std::rc::Rc;

use dynplot::chart::{ChartHandle, ChartSpec, ChartSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Create { id: u64, points: usize },
    Destroy(u64),
}

#[derive(Default)]
pub struct SurfaceLog {
    pub events: Vec<SurfaceEvent>,
    pub live: HashSet<u64>,
    pub max_live: usize,
    pub last_spec: Option<ChartSpec>,
}

impl SurfaceLog {
    pub fn creates(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Create { .. }))
            .count()
    }
}

/// Surface that records every create/destroy for later inspection.
pub struct RecordingSurface {
    next_id: u64,
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        (
            Self {
                next_id: 1,
                log: log.clone(),
            },
            log,
        )
    }
}

impl ChartSurface for RecordingSurface {
    fn create(&mut self, spec: ChartSpec) -> ChartHandle {
        let id = self.next_id;
        self.next_id += 1;
        let mut log = self.log.borrow_mut();
        log.events.push(SurfaceEvent::Create {
            id,
            points: spec.len(),
        });
        log.live.insert(id);
        log.max_live = log.max_live.max(log.live.len());
        log.last_spec = Some(spec);
        ChartHandle::new(id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        let mut log = self.log.borrow_mut();
        log.events.push(SurfaceEvent::Destroy(handle.id()));
        assert!(log.live.remove(&handle.id()), "destroyed a handle that was not live");
    }
}

pub fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
