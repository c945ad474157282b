//! # DONKI Space Weather Service
//!
//! All event feeds share one templated operation; the event type is the
//! last path segment.

use crate::core::dates::DateRange;
use crate::core::error::NasaError;
use crate::registry::operations::DONKI_EVENTS;
use crate::retrieve::dispatcher::Dispatcher;
use crate::retrieve::envelope::ResponseEnvelope;
use crate::retrieve::params::{PathParams, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DonkiEvent {
    CoronalMassEjection,
    SolarFlare,
    GeomagneticStorm,
    InterplanetaryShock,
    SolarEnergeticParticle,
    MagnetopauseCrossing,
    RadiationBeltEnhancement,
    HighSpeedStream,
    WsaEnlilSimulation,
    Notifications,
}

impl DonkiEvent {
    pub fn path_segment(&self) -> &'static str {
        match self {
            DonkiEvent::CoronalMassEjection => "CME",
            DonkiEvent::SolarFlare => "FLR",
            DonkiEvent::GeomagneticStorm => "GST",
            DonkiEvent::InterplanetaryShock => "IPS",
            DonkiEvent::SolarEnergeticParticle => "SEP",
            DonkiEvent::MagnetopauseCrossing => "MPC",
            DonkiEvent::RadiationBeltEnhancement => "RBE",
            DonkiEvent::HighSpeedStream => "HSS",
            DonkiEvent::WsaEnlilSimulation => "WSAEnlilSimulations",
            DonkiEvent::Notifications => "notifications",
        }
    }
}

pub struct DonkiService {
    dispatcher: Dispatcher,
}

impl DonkiService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Events of one type inside `range`.
    ///
    /// # Arguments
    /// * `event` - A [`DonkiEvent`]; selects the feed path.
    /// * `range` - Inclusive [`DateRange`], sent as `startDate`/`endDate`.
    pub async fn events(&self, event: DonkiEvent, range: &DateRange) -> Result<ResponseEnvelope, NasaError> {
        let path = PathParams::new().with("event", event.path_segment());
        let query = QueryParams::new()
            .with("startDate", range.start)
            .with("endDate", range.end);
        self.dispatcher.send(DONKI_EVENTS, &path, &query).await
    }
}
