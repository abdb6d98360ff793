/*
[INPUT]:  Auth setting names attached to each endpoint, client configuration
[OUTPUT]: Authorization headers applied to outgoing requests
[POS]:    Auth layer - security scheme application
[UPDATE]: When the API gains new security schemes
*/

pub mod scheme;

pub use scheme::{apply_auth, AuthScheme, STRAVA_OAUTH};
