pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::resolved_place_builder::*;

pub mod resolved_place_builder {

    use super::*;
    use crate::{geo::*, place::*};

    #[derive(Debug)]
    pub struct ResolvedPlaceBuild {
        place: ResolvedPlace,
    }

    impl ResolvedPlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.place_id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn formatted_address(mut self, address: &str) -> Self {
            self.place.formatted_address = address.into();
            self
        }
        pub fn names(mut self, names: Vec<impl Into<String>>) -> Self {
            self.place.names = names.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> ResolvedPlace {
            self.place
        }
    }

    impl Builder for ResolvedPlace {
        type Build = ResolvedPlaceBuild;
        fn build() -> ResolvedPlaceBuild {
            ResolvedPlaceBuild {
                place: ResolvedPlace {
                    place_id: "place".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    formatted_address: String::new(),
                    names: vec![],
                },
            }
        }
    }
}
