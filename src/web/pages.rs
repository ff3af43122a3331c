use crate::domain::passenger::Passenger;

/// Static input form. Field names must match what the model was
/// trained with, so they are spelled exactly like the CSV columns.
pub fn render_index() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Titanic Survival Predictor</title>
</head>
<body>
    <h1>Titanic Survival Predictor</h1>
    <p>Enter passenger details to estimate the chance of survival.</p>
    <form action="/predict" method="post">
        <label>Passenger class (1-3):
            <input type="text" name="Pclass" required>
        </label><br>
        <label>Age:
            <input type="text" name="Age" required>
        </label><br>
        <label>Siblings/spouses aboard:
            <input type="text" name="SibSp" required>
        </label><br>
        <label>Parents/children aboard:
            <input type="text" name="Parch" required>
        </label><br>
        <label>Fare:
            <input type="text" name="Fare" required>
        </label><br>
        <button type="submit">Predict</button>
    </form>
</body>
</html>
"#
    .to_string()
}

/// Result page: survival verdict, positive-class probability with one
/// decimal place, and an echo of the parsed (not raw) inputs.
pub fn render_result(survived: bool, probability: f64, passenger: &Passenger) -> String {
    let verdict = if survived {
        "This passenger would likely have survived."
    } else {
        "This passenger would likely not have survived."
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Prediction Result</title>
</head>
<body>
    <h1>{verdict}</h1>
    <p>Estimated survival probability: <strong>{probability:.1}%</strong></p>
    <h2>Input</h2>
    <ul>
        <li>Pclass: {pclass}</li>
        <li>Age: {age}</li>
        <li>SibSp: {sib_sp}</li>
        <li>Parch: {parch}</li>
        <li>Fare: {fare}</li>
    </ul>
    <a href="/">Try another passenger</a>
</body>
</html>
"#,
        verdict = verdict,
        probability = probability * 100.0,
        pclass = passenger.pclass,
        age = passenger.age,
        sib_sp = passenger.sib_sp,
        parch = passenger.parch,
        fare = passenger.fare,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_passenger() -> Passenger {
        Passenger {
            pclass: 3,
            age: 22.0,
            sib_sp: 1,
            parch: 0,
            fare: 7.25,
        }
    }

    #[test]
    fn test_index_contains_all_form_fields() {
        let page = render_index();
        for field in ["Pclass", "Age", "SibSp", "Parch", "Fare"] {
            assert!(page.contains(&format!("name=\"{}\"", field)));
        }
        assert!(page.contains("action=\"/predict\""));
    }

    #[test]
    fn test_result_formats_probability_with_one_decimal() {
        let page = render_result(true, 0.381, &sample_passenger());
        assert!(page.contains("38.1%"));
        assert!(page.contains("likely have survived"));
    }

    #[test]
    fn test_result_echoes_parsed_values() {
        let page = render_result(false, 0.12, &sample_passenger());
        assert!(page.contains("Pclass: 3"));
        assert!(page.contains("Fare: 7.25"));
        assert!(page.contains("likely not"));
    }
}
