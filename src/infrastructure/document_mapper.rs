// Mapper between readings and MongoDB documents
use crate::application::reading_repository::StoreError;
use crate::domain::reading::{Daylight, Reading, SensorSample};
use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};

pub fn reading_to_document(reading: &Reading) -> Document {
    doc! {
        "_id": reading.id.as_str(),
        "temperature": reading.sample.temperature,
        "humidity": reading.sample.humidity,
        "soilMoisture": reading.sample.soil_moisture,
        "daylight": reading.sample.daylight.as_str(),
        "createdAt": bson::DateTime::from_millis(reading.created_at.timestamp_millis()),
    }
}

pub fn document_to_reading(document: &Document) -> Result<Reading, StoreError> {
    let malformed = |e: bson::document::ValueAccessError| StoreError::Malformed(e.to_string());

    let id = match document.get("_id") {
        Some(bson::Bson::String(id)) => id.clone(),
        Some(bson::Bson::ObjectId(oid)) => oid.to_hex(),
        _ => return Err(StoreError::Malformed("missing _id".to_string())),
    };
    let daylight: Daylight = document
        .get_str("daylight")
        .map_err(malformed)?
        .parse()
        .map_err(StoreError::Malformed)?;
    let created_at = to_utc(document.get_datetime("createdAt").map_err(malformed)?)?;

    let sample = SensorSample::new(
        number(document, "temperature")?,
        number(document, "humidity")?,
        number(document, "soilMoisture")?,
        daylight,
    );

    Ok(Reading::restore(id, sample, created_at))
}

// Older writers may have stored whole numbers as integers.
fn number(document: &Document, key: &str) -> Result<f64, StoreError> {
    match document.get(key) {
        Some(bson::Bson::Double(v)) => Ok(*v),
        Some(bson::Bson::Int32(v)) => Ok(f64::from(*v)),
        Some(bson::Bson::Int64(v)) => Ok(*v as f64),
        _ => Err(StoreError::Malformed(format!("missing numeric field {}", key))),
    }
}

fn to_utc(value: &bson::DateTime) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| StoreError::Malformed("createdAt out of range".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_layout() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let reading = Reading::restore(
            "abc".to_string(),
            SensorSample::new(31.25, 39.5, 77.0, Daylight::Low),
            created,
        );
        let document = reading_to_document(&reading);

        assert_eq!(document.get_str("_id").unwrap(), "abc");
        assert_eq!(document.get_f64("soilMoisture").unwrap(), 77.0);
        assert_eq!(document.get_str("daylight").unwrap(), "LOW");
        assert_eq!(
            document.get_datetime("createdAt").unwrap().timestamp_millis(),
            created.timestamp_millis()
        );

        assert_eq!(document_to_reading(&document).unwrap(), reading);
    }

    #[test]
    fn test_stamped_reading_round_trips() {
        let reading = Reading::stamp(SensorSample::new(27.31, 44.02, 91.5, Daylight::High));
        let document = reading_to_document(&reading);

        assert_eq!(document_to_reading(&document).unwrap(), reading);
    }

    #[test]
    fn test_object_id_and_integer_fields() {
        let oid = bson::oid::ObjectId::new();
        let document = doc! {
            "_id": oid,
            "temperature": 30_i32,
            "humidity": 45_i64,
            "soilMoisture": 60.5,
            "daylight": "HIGH",
            "createdAt": bson::DateTime::from_millis(1_700_000_000_000),
        };

        let reading = document_to_reading(&document).unwrap();
        assert_eq!(reading.id, oid.to_hex());
        assert_eq!(reading.sample.temperature, 30.0);
        assert_eq!(reading.sample.humidity, 45.0);
        assert_eq!(reading.sample.daylight, Daylight::High);
    }

    #[test]
    fn test_rejects_incomplete_document() {
        let document = doc! {
            "_id": "x",
            "temperature": 25.0,
            "daylight": "HIGH",
            "createdAt": bson::DateTime::from_millis(0),
        };
        assert!(matches!(
            document_to_reading(&document),
            Err(StoreError::Malformed(_))
        ));

        let document = doc! {
            "_id": "y",
            "temperature": 25.0,
            "humidity": 50.0,
            "soilMoisture": 60.0,
            "daylight": "DUSK",
            "createdAt": bson::DateTime::from_millis(0),
        };
        assert!(document_to_reading(&document).is_err());
    }
}
