//! Test doubles shared by the use case tests.

use crate::{
    entities::*,
    gateways::{geocode::GeoCodingGateway, pace::Pacer},
};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Geocode(String),
    Pause(Duration),
}

/// Records the calls of all test doubles in a single sequence.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn geocode_calls(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Geocode(_)))
            .count()
    }
}

#[derive(Debug, Clone)]
enum Response {
    Fail,
    Empty,
    InvalidPos,
    Place(String),
}

/// Answers each address with a scripted sequence of responses.
///
/// Once the script of an address is used up every further
/// request for it fails.
#[derive(Debug)]
pub struct FakeGeocoder {
    log: CallLog,
    scripts: RefCell<HashMap<String, VecDeque<Response>>>,
}

impl FakeGeocoder {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            scripts: Default::default(),
        }
    }

    fn push(self, address: &str, response: Response, times: u32) -> Self {
        {
            let mut scripts = self.scripts.borrow_mut();
            let script = scripts.entry(address.to_owned()).or_default();
            for _ in 0..times {
                script.push_back(response.clone());
            }
        }
        self
    }

    pub fn place(self, address: &str, place_id: &str) -> Self {
        self.push(address, Response::Place(place_id.to_owned()), 1)
    }

    pub fn failing(self, address: &str, times: u32) -> Self {
        self.push(address, Response::Fail, times)
    }

    pub fn empty(self, address: &str, times: u32) -> Self {
        self.push(address, Response::Empty, times)
    }

    pub fn invalid_pos(self, address: &str, times: u32) -> Self {
        self.push(address, Response::InvalidPos, times)
    }
}

impl GeoCodingGateway for FakeGeocoder {
    fn resolve_address(&self, address: &str) -> anyhow::Result<Vec<GeocodedPlace>> {
        self.log.push(Call::Geocode(address.to_owned()));
        let response = self
            .scripts
            .borrow_mut()
            .get_mut(address)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Response::Fail);
        match response {
            Response::Fail => Err(anyhow::anyhow!("service unavailable")),
            Response::Empty => Ok(vec![]),
            Response::InvalidPos => Ok(vec![GeocodedPlace {
                place_id: "invalid".into(),
                pos: MapPoint::default(),
                formatted_address: address.to_owned(),
            }]),
            Response::Place(place_id) => Ok(vec![GeocodedPlace {
                place_id: place_id.into(),
                pos: MapPoint::from_lat_lng_deg(51.5, -0.12),
                formatted_address: format!("{address}, London"),
            }]),
        }
    }
}

#[derive(Debug)]
pub struct RecordingPacer {
    log: CallLog,
}

impl RecordingPacer {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, delay: Duration) {
        self.log.push(Call::Pause(delay));
    }
}
