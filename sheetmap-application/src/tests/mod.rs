pub mod prelude {
    pub use crate::{
        pipeline::{Gateways, Pipeline},
        *,
    };
    use anyhow::{anyhow, bail};
    use sheetmap_core::gateways::rows::RawRow;
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Arc, Mutex,
        },
        time::Duration,
    };

    #[derive(Default)]
    pub struct FakeRows {
        sheets: Mutex<HashMap<String, Vec<RawRow>>>,
        calls: AtomicUsize,
        panicking: AtomicBool,
    }

    impl FakeRows {
        pub fn insert(&self, sheet_id: &str, rows: Vec<RawRow>) {
            self.sheets
                .lock()
                .unwrap()
                .insert(sheet_id.to_string(), rows);
        }
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
        pub fn set_panicking(&self, panicking: bool) {
            self.panicking.store(panicking, Ordering::SeqCst);
        }
    }

    impl RowSourceGateway for FakeRows {
        fn fetch_rows(&self, sheet_id: &SheetId) -> anyhow::Result<Vec<RawRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.panicking.load(Ordering::SeqCst) {
                panic!("row source crashed");
            }
            self.sheets
                .lock()
                .unwrap()
                .get(sheet_id.as_str())
                .cloned()
                .ok_or_else(|| anyhow!("sheet {sheet_id} not found"))
        }
    }

    #[derive(Default)]
    pub struct FakeGeocoder {
        places: Mutex<HashMap<String, GeocodedPlace>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeGeocoder {
        pub fn insert(&self, address: &str, place_id: &str, lat: f64, lng: f64) {
            let place = GeocodedPlace {
                place_id: place_id.into(),
                pos: MapPoint::from_lat_lng_deg(lat, lng),
                formatted_address: format!("{address}, London"),
            };
            self.places
                .lock()
                .unwrap()
                .insert(address.to_string(), place);
        }
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl GeoCodingGateway for FakeGeocoder {
        fn resolve_address(&self, address: &str) -> anyhow::Result<Vec<GeocodedPlace>> {
            self.calls.lock().unwrap().push(address.to_string());
            match self.places.lock().unwrap().get(address) {
                Some(place) => Ok(vec![place.clone()]),
                None => bail!("unknown address"),
            }
        }
    }

    #[derive(Default)]
    pub struct CountingPacer(AtomicUsize);

    impl CountingPacer {
        pub fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Pacer for CountingPacer {
        fn pause(&self, _: Duration) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    pub struct InMemorySession {
        values: Mutex<HashMap<String, String>>,
        failing: AtomicBool,
    }

    impl InMemorySession {
        pub fn insert(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
        pub fn value(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }
        pub fn fail(&self) {
            self.failing.store(true, Ordering::SeqCst);
        }
    }

    impl SessionStore for InMemorySession {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            if self.failing.load(Ordering::SeqCst) {
                bail!("session is not available");
            }
            Ok(self.value(key))
        }
        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.failing.load(Ordering::SeqCst) {
                bail!("session is not available");
            }
            self.insert(key, value);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier(Mutex<Vec<String>>);

    impl RecordingNotifier {
        pub fn events(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl NotificationGateway for RecordingNotifier {
        fn notify(&self, event: NotificationEvent) {
            let event = match event {
                NotificationEvent::Resolved { places, .. } => format!("resolved: {}", places.len()),
                NotificationEvent::UsingSavedReference { reference } => {
                    format!("using saved reference: {reference}")
                }
                NotificationEvent::Failed { message } => format!("failed: {message}"),
            };
            self.0.lock().unwrap().push(event);
        }
    }

    pub struct Fixture {
        pub rows: Arc<FakeRows>,
        pub geocoder: Arc<FakeGeocoder>,
        pub pacer: Arc<CountingPacer>,
        pub session: Arc<InMemorySession>,
        pub notify: Arc<RecordingNotifier>,
    }

    impl Default for Fixture {
        fn default() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                rows: Default::default(),
                geocoder: Default::default(),
                pacer: Default::default(),
                session: Default::default(),
                notify: Default::default(),
            }
        }
    }

    impl Fixture {
        pub fn gateways(&self) -> Gateways {
            Gateways {
                rows: self.rows.clone(),
                geocoder: self.geocoder.clone(),
                pacer: self.pacer.clone(),
                session: self.session.clone(),
                notify: self.notify.clone(),
            }
        }
        pub fn pipeline(&self) -> Pipeline {
            Pipeline::new(self.gateways(), Default::default())
        }
    }
}
