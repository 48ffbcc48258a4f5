//! Minimal GeoJSON FeatureCollection reading and writing.
//!
//! Input: `Polygon` and `MultiPolygon` features (each MultiPolygon part is a
//! separate polygon with the same properties); other geometries are skipped.
//! Positions keep x and y only.

use std::path::Path;

use anyhow::{bail, Context, Result};
use polymid::api::{DebugArtifacts, Feature, FeatureResult, MedialGeometry, Outcome, Polygon, Vec2};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct Collection {
    features: Vec<InFeature>,
}

#[derive(Deserialize)]
struct InFeature {
    geometry: Option<InGeometry>,
    #[serde(default)]
    properties: Value,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum InGeometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Other,
}

fn ring(positions: &[Vec<f64>]) -> Result<Vec<Vec2>> {
    positions
        .iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok(Vec2::new(*x, *y)),
            _ => bail!("position with fewer than two ordinates: {p:?}"),
        })
        .collect()
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Result<Option<Polygon>> {
    let Some((exterior, holes)) = rings.split_first() else {
        return Ok(None);
    };
    let holes = holes.iter().map(|h| ring(h)).collect::<Result<Vec<_>>>()?;
    Ok(Some(Polygon::new(ring(exterior)?, holes)))
}

/// Parse a FeatureCollection into polygon features.
pub fn parse_features(text: &str) -> Result<Vec<Feature<Value>>> {
    let coll: Collection = serde_json::from_str(text).context("parsing GeoJSON FeatureCollection")?;
    let mut out = Vec::new();
    for (i, f) in coll.features.into_iter().enumerate() {
        let parts = match f.geometry {
            Some(InGeometry::Polygon { coordinates }) => vec![coordinates],
            Some(InGeometry::MultiPolygon { coordinates }) => coordinates,
            Some(InGeometry::Other) | None => {
                tracing::warn!(feature = i, "skipping non-polygon geometry");
                continue;
            }
        };
        for rings in &parts {
            let Some(polygon) = polygon(rings).with_context(|| format!("feature {i}"))? else {
                tracing::warn!(feature = i, "skipping polygon without rings");
                continue;
            };
            out.push(Feature {
                polygon,
                properties: f.properties.clone(),
            });
        }
    }
    Ok(out)
}

pub fn read_features(path: &Path) -> Result<Vec<Feature<Value>>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_features(&text)
}

fn coords(line: &[Vec2]) -> Value {
    Value::Array(line.iter().map(|p| json!([p.x, p.y])).collect())
}

pub fn geometry_json(g: &MedialGeometry) -> Value {
    match g {
        MedialGeometry::Line(l) => json!({"type": "LineString", "coordinates": coords(l)}),
        MedialGeometry::MultiLine(ls) => json!({
            "type": "MultiLineString",
            "coordinates": ls.iter().map(|l| coords(l)).collect::<Vec<_>>(),
        }),
        MedialGeometry::Point(p) => json!({"type": "Point", "coordinates": [p.x, p.y]}),
    }
}

fn collection(features: Vec<Value>) -> Value {
    json!({"type": "FeatureCollection", "features": features})
}

fn feature(geometry: Value, properties: &Value) -> Value {
    json!({"type": "Feature", "geometry": geometry, "properties": properties})
}

/// Medial lines (or centroid fallbacks) with the input properties.
pub fn results_collection(results: &[FeatureResult<Value>]) -> Value {
    collection(
        results
            .iter()
            .map(|r| {
                let g = r.outcome.geometry().map_or(Value::Null, |g| geometry_json(&g));
                feature(g, &r.properties)
            })
            .collect(),
    )
}

/// Debug layers: raw skeleton edges and unsmoothed center paths.
pub fn debug_collections(results: &[FeatureResult<Value>]) -> (Value, Value) {
    let mut skeleton = Vec::new();
    let mut medial = Vec::new();
    for r in results {
        let Outcome::Medial {
            debug: Some(DebugArtifacts {
                skeleton: edges,
                medial_axis,
            }),
            ..
        } = &r.outcome
        else {
            continue;
        };
        let lines: Vec<Vec<Vec2>> = edges.iter().map(|e| e.to_vec()).collect();
        skeleton.push(feature(geometry_json(&MedialGeometry::MultiLine(lines)), &r.properties));
        medial.push(feature(
            geometry_json(&MedialGeometry::Line(medial_axis.clone())),
            &r.properties,
        ));
    }
    (collection(skeleton), collection(medial))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "a"},
             "geometry": {"type": "Polygon", "coordinates": [
                [[0, 0, 5], [4, 0, 5], [4, 1, 5], [0, 1, 5], [0, 0, 5]],
                [[1, 0.25], [2, 0.25], [2, 0.75], [1, 0.75], [1, 0.25]]]}},
            {"type": "Feature", "properties": {"name": "b"},
             "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                [[[5, 5], [6, 5], [6, 6], [5, 5]]]]}},
            {"type": "Feature", "properties": {"name": "c"},
             "geometry": {"type": "Point", "coordinates": [1, 2]}},
            {"type": "Feature", "properties": null, "geometry": null}
        ]
    }"#;

    #[test]
    fn polygons_and_multipolygon_parts_are_read() {
        let fs = parse_features(INPUT).unwrap();
        assert_eq!(fs.len(), 3);
        assert_eq!(fs[0].polygon.exterior().len(), 4);
        assert_eq!(fs[0].polygon.holes().len(), 1);
        assert_eq!(fs[1].properties["name"], "b");
        assert_eq!(fs[2].properties["name"], "b");
        assert_eq!(fs[2].polygon.exterior()[0], Vec2::new(5.0, 5.0));
    }

    #[test]
    fn short_positions_are_rejected() {
        let bad = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{},
            "geometry":{"type":"Polygon","coordinates":[[[0],[1,0],[1,1]]]}}]}"#;
        assert!(parse_features(bad).is_err());
    }

    #[test]
    fn geometries_serialize_as_geojson() {
        let l = geometry_json(&MedialGeometry::Line(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0)]));
        assert_eq!(l, json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 2.0]]}));
        let p = geometry_json(&MedialGeometry::Point(Vec2::new(3.0, 4.0)));
        assert_eq!(p["type"], "Point");
        assert_eq!(p["coordinates"], json!([3.0, 4.0]));
    }
}
