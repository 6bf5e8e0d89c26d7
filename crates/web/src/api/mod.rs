use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, HeaderName, Method, Uri},
    response::IntoResponse,
    routing::{get, on},
    Json, Router,
};
use geosearch::{
    database::{LocationRepo, VenueRepo},
    locator::MarkerAttributes,
    RequestError,
};
use model::{location::Location, WithId};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    common::{route_not_found, RouteErrorResponse, METHOD_FILTER_ALL},
    markup::{render_markers, OutputFormat},
    RouteResult, WebState,
};

const SEARCH_RESULT_LIMIT: i64 = 10;

type XmlResponse = ([(HeaderName, &'static str); 1], String);

pub fn routes(state: WebState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/search", get(search))
        .route("/nearest/:postcode", get(nearest))
        .route("/venues/nearest/:postcode", get(venues_nearest))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn ping() -> impl IntoResponse {
    Json(json!({
        "message": "pong!"
    }))
}

#[derive(Deserialize)]
struct NearestQuery {
    // arrives as text; a malformed value degrades to the default radius
    #[serde(rename = "Radius")]
    radius: Option<String>,
}

async fn nearest(
    OriginalUri(original_uri): OriginalUri,
    Path(postcode): Path<String>,
    Query(params): Query<NearestQuery>,
    State(state): State<WebState>,
) -> RouteResult<XmlResponse> {
    let radius = parse_radius(params.radius);
    let reference = state
        .store
        .by_keyword(&postcode, None)
        .await
        .map_err(|why| route_error(why.into(), &original_uri))?
        .into_iter()
        .last();

    let results = match reference {
        Some(reference) => state
            .store
            .nearest_locations(
                &state.locator,
                reference.content.latitude,
                reference.content.longitude,
                radius,
            )
            .await
            .map_err(|why| route_error(why.into(), &original_uri))?,
        // an unresolvable postcode renders an empty marker set, not an error
        None => Vec::new(),
    };

    let markers = results
        .iter()
        .map(|result| state.locator.marker_attributes(result))
        .collect::<Vec<_>>();
    xml_response(&state.output_format, &markers, &original_uri)
}

async fn venues_nearest(
    OriginalUri(original_uri): OriginalUri,
    Path(postcode): Path<String>,
    Query(params): Query<NearestQuery>,
    State(state): State<WebState>,
) -> RouteResult<XmlResponse> {
    let radius = parse_radius(params.radius);
    let reference = state
        .store
        .by_keyword(&postcode, None)
        .await
        .map_err(|why| route_error(why.into(), &original_uri))?
        .into_iter()
        .last();

    let results = match reference {
        Some(reference) => state
            .store
            .nearest_venues(
                &state.venue_locator,
                reference.content.latitude,
                reference.content.longitude,
                radius,
            )
            .await
            .map_err(|why| route_error(why.into(), &original_uri))?,
        None => Vec::new(),
    };

    let markers = results
        .iter()
        .map(|result| state.venue_locator.marker_attributes(result))
        .collect::<Vec<_>>();
    xml_response(&state.output_format, &markers, &original_uri)
}

#[derive(Deserialize)]
struct SearchQuery {
    term: Option<String>,
}

async fn search(
    OriginalUri(original_uri): OriginalUri,
    Query(params): Query<SearchQuery>,
    State(state): State<WebState>,
) -> RouteResult<Json<Value>> {
    let term = params.term.unwrap_or_default();
    if term.is_empty() {
        return Ok(Json(Value::Bool(false)));
    }
    let locations = state
        .store
        .by_keyword(&term, Some(SEARCH_RESULT_LIMIT))
        .await
        .map_err(|why| route_error(why.into(), &original_uri))?;
    Ok(Json(search_response(&locations)))
}

fn search_response(locations: &[WithId<Location>]) -> Value {
    Value::Array(
        locations
            .iter()
            .map(|location| {
                json!({
                    "id": location.id,
                    "label": location.content.full_title(),
                })
            })
            .collect(),
    )
}

fn parse_radius(radius: Option<String>) -> Option<f64> {
    radius.and_then(|value| value.parse::<f64>().ok())
}

fn route_error(why: RequestError, original_uri: &Uri) -> RouteErrorResponse {
    RouteErrorResponse::from(why)
        .with_method(&Method::GET)
        .with_uri(original_uri.path())
}

fn xml_response(
    format: &OutputFormat,
    markers: &[MarkerAttributes],
    original_uri: &Uri,
) -> RouteResult<XmlResponse> {
    render_markers(format, markers)
        .map(|body| ([(header::CONTENT_TYPE, "text/xml")], body))
        .map_err(|why| route_error(why, original_uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use utility::id::Id;

    #[test]
    fn search_response_pairs_ids_with_full_titles() {
        let locations = vec![WithId::new(
            Id::new(42),
            Location {
                name: "Richmond".to_owned(),
                state: "VIC".to_owned(),
                location_type: "Suburb".to_owned(),
                postcode: "3121".to_owned(),
                latitude: -37.8182,
                longitude: 145.0017,
            },
        )];
        let response = search_response(&locations);
        assert_eq!(
            response,
            json!([{ "id": 42, "label": "Richmond, VIC 3121" }])
        );
    }

    #[test]
    fn search_response_of_no_matches_is_an_empty_array() {
        assert_eq!(search_response(&[]), json!([]));
    }

    #[test]
    fn radius_parses_when_numeric() {
        assert_eq!(parse_radius(Some("12.5".to_owned())), Some(12.5));
    }

    #[test]
    fn malformed_or_absent_radius_degrades_to_none() {
        assert_eq!(parse_radius(Some("twenty".to_owned())), None);
        assert_eq!(parse_radius(None), None);
    }
}
