//! Bundled sample dataset
//!
//! Daily electricity consumption (MU) of Indian states and union territories.

/// Sample consumption table in loader format
pub const SAMPLE_CSV: &str = ",Punjab,Haryana,Rajasthan,Delhi,UP,Uttarakhand,HP,J&K,Chandigarh,Chhattisgarh,Gujarat,MP,Maharashtra,Goa,DNH,Andhra Pradesh,Telangana,Karnataka,Kerala,Tamil Nadu,Pondy,Bihar,Jharkhand,Odisha,West Bengal,Sikkim,Arunachal Pradesh,Assam,Manipur,Meghalaya,Mizoram,Nagaland,Tripura
02/01/2019 00:00:00,119.9,130.3,234.1,85.8,313.9,40.7,30,52.5,5,78.7,319.5,253,428.6,12.8,18.6,164.6,204.2,206.3,72.7,268.3,6.3,82.3,24.8,70.2,108.2,2,2.1,21.7,2.7,6.1,1.9,2.2,3.4";

/// Series selected when nothing else is chosen
pub const DEFAULT_SERIES: &str = "Punjab";
