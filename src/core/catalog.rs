//! NWS text product codes.
//!
//! A report code is a three letter product type followed by the node that
//! issued it, e.g. `AFDPQR` is the Area Forecast Discussion from Portland,
//! OR. Nodes are station identifiers with the leading `K` dropped, so most
//! are three characters, but some state-wide products use a two letter
//! node (`SFPOR`).

use crate::utils::error::{ReportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportCode<'a> {
    pub kind: &'a str,
    pub node: &'a str,
}

impl<'a> ReportCode<'a> {
    pub fn parse(code: &'a str) -> Result<Self> {
        let invalid = |reason: &str| ReportError::ReportCodeError {
            code: code.to_string(),
            reason: reason.to_string(),
        };

        if !code.is_ascii() {
            return Err(invalid("code must be ASCII"));
        }
        if code.len() < 5 || code.len() > 6 {
            return Err(invalid("expected a 3 letter type and a 2-3 character node"));
        }

        let (kind, node) = code.split_at(3);
        if !kind.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            || !kind.starts_with(|c: char| c.is_ascii_uppercase())
        {
            return Err(invalid("report type must be upper case"));
        }
        if !node.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(invalid("node must be upper case alphanumeric"));
        }

        Ok(Self { kind, node })
    }

    pub fn type_name(&self) -> Option<&'static str> {
        report_type_name(self.kind)
    }
}

impl std::fmt::Display for ReportCode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.kind, self.node)
    }
}

/// Report types published as text products. Not every type exists at every
/// node, and a type that exists is not always issued.
const REPORT_TYPES: &[(&str, &str)] = &[
    ("ABV", "Rawinsonde Data above 100 Millibars"),
    ("ADM", "Administrative Message"),
    ("AFD", "Area Forecast Discussion"),
    ("AFM", "Area Forecast Matrices"),
    ("AFP", "Area Forecast"),
    ("AGO", "Agricultural Observations"),
    ("ALT", "Space Weather Alert"),
    ("AQI", "Air Quality Statement"),
    ("AVW", "Avalanche Warning"),
    ("AWW", "Airport Weather Warning"),
    ("BOY", "Buoy Reports"),
    ("BRT", "Broadcast Text"),
    ("CAE", "Child Abduction Emergency"),
    ("CCF", "Coded Cities Forecast"),
    ("CF6", "Preliminary Monthly Climate"),
    ("CFW", "Coastal Hazard Message"),
    ("CGR", "Coast Guard Surface Report"),
    ("CLI", "Climatological Report (Daily)"),
    ("CLM", "Climate Summary"),
    ("CLS", "Climatological Report (Seasonal)"),
    ("CWF", "Coastal Waters Forecast"),
    ("DDO", "Daily Dispersion Outlook"),
    ("EFP", "3 to 5 Day Extended Forecast"),
    ("EOL", "Enhanced Forecast/Outlook"),
    ("EQI", "Seismic Information"),
    ("ESF", "Hydrologic Outlook"),
    ("ESP", "Extended Streamflow Prediction"),
    ("FA0", "Aviation Area Forecast"),
    ("FDI", "Fire Danger Indices"),
    ("FFA", "Flood Watch"),
    ("FFG", "Flash Flood Guidance"),
    ("FFH", "Headwater Guidance"),
    ("FFS", "Flash Flood Statement"),
    ("FFW", "Flash Flood Warning"),
    ("FLS", "Flood Statement"),
    ("FLW", "Flood Warning"),
    ("FTM", "Free Text Message"),
    ("FWF", "Fire Weather Forecast"),
    ("FWM", "Miscellaneous Fire Weather Product"),
    ("FWN", "Fire Weather Notification"),
    ("FWO", "Fire Weather Observation"),
    ("FWS", "Fire Weather Spot Forecast"),
    ("FZL", "Rawinsonde Freezing Level Data"),
    ("GLF", "Great Lakes Forecast"),
    ("HMD", "Hydrometeorological Discussion"),
    ("HRR", "Hourly Roundup"),
    ("HSF", "High Seas Forecast"),
    ("HWO", "Hazardous Weather Outlook"),
    ("HWR", "Hourly Weather Roundup"),
    ("HYD", "Supplementary Temperature & Precipitation Table"),
    ("HYM", "Monthly Hydrometeorological Product"),
    ("ICE", "Ice Forecast"),
    ("LCD", "Local Climatological Data"),
    ("LCO", "Local Cooperative Observation"),
    ("LSR", "Local Storm Report"),
    ("MAN", "Rawinsonde Observation Mandatory Levels"),
    ("MAP", "Mean Areal Precipitation"),
    ("MIM", "Marine Interpretation Message"),
    ("MIS", "Miscellaneous Local Product"),
    ("MTR", "METAR Observations"),
    ("MWS", "Marine Weather Statement"),
    ("MWW", "Marine Weather Message"),
    ("NOW", "Short Term Forecast"),
    ("NPW", "Non-Precipitation Watch/Warning/Advisory"),
    ("NSH", "Nearshore Marine Forecast"),
    ("OFF", "Offshore/NAVTEX Forecast"),
    ("OMR", "Other Marine Reports"),
    ("OPU", "Other Public Products"),
    ("OSO", "Daily Cooperative Observer and Automated Station Reports"),
    ("PFM", "Point Forecast Matrices"),
    ("PFW", "Fire Weather Point Forecast Matrices"),
    ("PMD", "HPC Short Range Forecast Discussion"),
    ("PNS", "Public Information Statement"),
    ("PTS", "Convective Outlook Areal Outline"),
    ("REC", "Recreational Report"),
    ("RER", "Record Report"),
    ("RFD", "Rangeland Fire Danger Forecast"),
    ("RFR", "Route Forecast"),
    ("RFW", "Red Flag Warning"),
    ("RR1", "Hydrometeorological Data Report Part 1"),
    ("RR2", "Hydrometeorological Data Report Part 2"),
    ("RR3", "Hydrometeorological Data Report Part 3"),
    ("RR4", "Hydrometeorological Data Report Part 4"),
    ("RR5", "Hydrometeorological Data Report Part 5"),
    ("RR9", "Hydrometeorological Data Report Part 9"),
    ("RRM", "Supplementary Rainfall Reports"),
    ("RRS", "Hydrometeorological Automated Data System Report"),
    ("RTP", "Regional Temperature and Precipitation Table"),
    ("RVA", "Hydrologic Summary"),
    ("RVD", "Daily River and Lake Summary"),
    ("RVF", "River Forecast Product"),
    ("RVM", "Miscellaneous River Product"),
    ("RVR", "River Lake Stages and Forecasts"),
    ("RVS", "Hydrologic Statement"),
    ("RWR", "Regional Hourly Weather"),
    ("RWS", "Regional Weather Summary"),
    ("SCD", "Supplementary Climatological Data"),
    ("SCS", "Selected Cities Weather Summary"),
    ("SFP", "State Forecast Product"),
    ("SFT", "Tabular State Forecast"),
    ("SGL", "Rawinsonde Observation Significant Levels"),
    ("SIG", "Turbulence SIGMET"),
    ("SIM", "Satellite Interpretation Message"),
    ("SMF", "Smoke Management Weather Forecast"),
    ("SMW", "Special Marine Warning"),
    ("SPS", "Special Weather Statement"),
    ("SRF", "Surf Forecast"),
    ("SSM", "Synoptic Hour Surface Observation"),
    ("STO", "Road Condition Reports"),
    ("STP", "State Temperature and Precipitation Table"),
    ("STQ", "Spot Forecast Request"),
    ("SVR", "Severe Thunderstorm Warning"),
    ("SVS", "Severe Weather Statement"),
    ("SWO", "Severe Weather Outlook"),
    ("SYN", "Regional Synopsis"),
    ("TAF", "Terminal Aerodrome Forecast"),
    ("TAP", "Terminal Alerting Products"),
    ("TID", "Tide Report"),
    ("TOR", "Tornado Warning"),
    ("WA0", "AirMET"),
    ("WAR", "Space Weather Warning"),
    ("WAT", "Space Weather Watch"),
    ("WCN", "Watch County Notification Message"),
    ("WOU", "Watch Outline Update"),
    ("WSW", "Winter Storm Watch/Warning/Advisory"),
    ("WWA", "Watch Status Report"),
    ("XF0", "Forecasts in XML"),
    ("XOB", "Observations in XML"),
    ("XTE", "Temperature Extremes in XML"),
    ("ZFP", "Zone Forecast"),
];

pub fn report_type_name(kind: &str) -> Option<&'static str> {
    REPORT_TYPES
        .iter()
        .find(|(code, _)| *code == kind)
        .map(|(_, name)| *name)
}

/// Label for log lines: `AFDPQR (Area Forecast Discussion)` when the last
/// path segment is a known report code, otherwise the URL itself.
pub fn describe_url(url: &str) -> String {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    match ReportCode::parse(last_segment) {
        Ok(code) => match code.type_name() {
            Some(name) => format!("{} ({})", code, name),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}
