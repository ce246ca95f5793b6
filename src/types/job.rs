use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat record kept in the cache and printed to the operator.
///
/// JSON keys are the printed column labels, which is also the layout of
/// previously cached rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Responsible Person")]
    pub responsible_person: String,
}

impl JobRecord {
    pub const COLUMNS: [&'static str; 6] = [
        "Job Title",
        "Company Name",
        "Location",
        "Email",
        "Phone",
        "Responsible Person",
    ];

    pub fn cells(&self) -> [&str; 6] {
        [
            &self.job_title,
            &self.company_name,
            &self.location,
            &self.email,
            &self.phone,
            &self.responsible_person,
        ]
    }
}

/// Jobs search response envelope.
#[derive(Debug, Deserialize)]
pub struct JobsPage {
    pub elements: Vec<JobElement>,
}

/// One element of `elements`. Only the fields the record needs are decoded.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct JobElement {
    pub title: String,
    pub company: Company,
    pub location: Location,
    pub contactInfo: ContactInfo,
    pub createdBy: CreatedBy,
}

#[derive(Debug, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: Option<String>,
}

/// Locations arrive either as plain text or as a structured object; `null` reads as empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Text(String),
    Structured(Value),
}

impl Location {
    fn into_text(self) -> String {
        match self {
            Location::Text(s) => s,
            Location::Structured(Value::Null) => String::new(),
            Location::Structured(v) => v.to_string(),
        }
    }
}

/// `phoneNumbers` has no default: an element without it fails to decode,
/// while `emailAddress` falls back to empty.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct ContactInfo {
    #[serde(default)]
    pub emailAddress: Option<String>,
    pub phoneNumbers: Vec<PhoneNumber>,
}

#[derive(Debug, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct CreatedBy {
    #[serde(default)]
    pub firstName: Option<String>,
    #[serde(default)]
    pub lastName: Option<String>,
}

impl From<JobElement> for JobRecord {
    fn from(job: JobElement) -> Self {
        let phone = job
            .contactInfo
            .phoneNumbers
            .into_iter()
            .next()
            .map(|pn| pn.number)
            .unwrap_or_default();
        let responsible_person = format!(
            "{} {}",
            job.createdBy.firstName.unwrap_or_default(),
            job.createdBy.lastName.unwrap_or_default()
        );
        JobRecord {
            job_title: job.title,
            company_name: job.company.name.unwrap_or_default(),
            location: job.location.into_text(),
            email: job.contactInfo.emailAddress.unwrap_or_default(),
            phone,
            responsible_person,
        }
    }
}

impl From<JobsPage> for Vec<JobRecord> {
    fn from(page: JobsPage) -> Self {
        page.elements.into_iter().map(JobRecord::from).collect()
    }
}

/// Decode a raw jobs search body and flatten every element.
pub fn records_from_slice(body: &[u8]) -> Result<Vec<JobRecord>, serde_json::Error> {
    let page: JobsPage = serde_json::from_slice(body)?;
    Ok(page.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn element() -> Value {
        json!({
            "id": 42,
            "title": "Rust Engineer",
            "company": {"name": "Acme"},
            "location": "Berlin, DE",
            "contactInfo": {
                "emailAddress": "jobs@acme.test",
                "phoneNumbers": [{"number": "+49 30 1234"}, {"number": "+49 30 9999"}]
            },
            "createdBy": {"firstName": "Ada", "lastName": "Lovelace"}
        })
    }

    fn decode(elements: Vec<Value>) -> Result<Vec<JobRecord>, serde_json::Error> {
        let body = serde_json::to_vec(&json!({ "elements": elements })).unwrap();
        records_from_slice(&body)
    }

    #[test]
    fn flattens_a_complete_element() {
        let records = decode(vec![element()]).unwrap();
        assert_eq!(
            records,
            vec![JobRecord {
                job_title: "Rust Engineer".into(),
                company_name: "Acme".into(),
                location: "Berlin, DE".into(),
                email: "jobs@acme.test".into(),
                phone: "+49 30 1234".into(),
                responsible_person: "Ada Lovelace".into(),
            }]
        );
    }

    #[test]
    fn absent_email_becomes_empty() {
        let mut e = element();
        e["contactInfo"].as_object_mut().unwrap().remove("emailAddress");
        let records = decode(vec![e]).unwrap();
        assert_eq!(records[0].email, "");
    }

    #[test]
    fn empty_phone_list_becomes_empty() {
        let mut e = element();
        e["contactInfo"]["phoneNumbers"] = json!([]);
        let records = decode(vec![e]).unwrap();
        assert_eq!(records[0].phone, "");
    }

    #[test]
    fn missing_phone_list_fails() {
        let mut e = element();
        e["contactInfo"].as_object_mut().unwrap().remove("phoneNumbers");
        let err = decode(vec![element(), e]).unwrap_err();
        assert!(err.to_string().contains("phoneNumbers"), "{err}");
    }

    #[test]
    fn missing_creator_names_and_company_name_default_to_empty() {
        let mut e = element();
        e["createdBy"] = json!({});
        e["company"] = json!({});
        let records = decode(vec![e]).unwrap();
        assert_eq!(records[0].responsible_person, " ");
        assert_eq!(records[0].company_name, "");
    }

    #[test]
    fn structured_location_is_kept_as_json_text() {
        let mut e = element();
        e["location"] = json!({"country": "DE"});
        let records = decode(vec![e]).unwrap();
        assert_eq!(records[0].location, r#"{"country":"DE"}"#);
    }

    #[test]
    fn null_location_becomes_empty() {
        let mut e = element();
        e["location"] = Value::Null;
        let records = decode(vec![e]).unwrap();
        assert_eq!(records[0].location, "");
    }

    #[test]
    fn serialized_keys_use_column_labels() {
        let records = decode(vec![element()]).unwrap();
        let v = serde_json::to_value(&records[0]).unwrap();
        for col in JobRecord::COLUMNS {
            assert!(v.get(col).is_some(), "missing key {col}");
        }
    }
}
