mod common;

use orrery::bodies::Body;
use orrery::ephemeris::Ephemeris;
use orrery::ref_system::norm;

use crate::common::{assert_vector_close, f, utc};

#[test]
fn earth_heliocentric() {
    let ephem = Ephemeris::new();

    let v = ephem
        .heliocentric_3d(Body::Earth, &utc("1950-03-26T10:00:00"))
        .unwrap();
    assert_vector_close(&v, [-0.99245, -0.10227, -0.0000235], 1e-3);

    let v = ephem
        .heliocentric_3d(Body::Earth, &utc("2019-11-09T00:00:00"))
        .unwrap();
    assert_vector_close(&v, [0.688027, 0.712771, -0.0000315], 1e-3);
}

#[test]
fn inner_planets() {
    let ephem = Ephemeris::new();

    let venus = ephem
        .heliocentric_3d(Body::Venus, &utc("1950-03-26T10:00:00"))
        .unwrap();
    assert_vector_close(&venus, [-0.56044, -0.45619, 0.02620], 1e-3);

    let mercury = ephem
        .heliocentric_3d(Body::Mercury, &utc("1906-06-06T10:53:00"))
        .unwrap();
    assert_vector_close(&mercury, [0.13968, 0.27556, 0.009622], 1e-3);
}

#[test]
fn outer_planets() {
    let ephem = Ephemeris::new();

    let saturn = ephem
        .heliocentric_3d(Body::Saturn, &utc("1910-06-06T10:58:00"))
        .unwrap();
    assert_vector_close(&saturn, [8.08715, 4.53511, -0.40076], 1e-1);

    let jupiter = ephem
        .heliocentric_3d(Body::Jupiter, &utc("2019-11-09T00:00:00"))
        .unwrap();
    assert_vector_close(&jupiter, [0.13152, -5.24508, 0.018843], 1e-2);

    let neptune = ephem
        .heliocentric_3d(Body::Neptune, &utc("2020-04-10T04:02:00"))
        .unwrap();
    assert_vector_close(&neptune, [29.30676, -6.05747, -0.55075], 1e-2);
}

#[test]
fn sun_is_the_origin_and_earth_is_its_mirror() {
    let ephem = Ephemeris::new();
    let t = utc("2019-11-09T00:00:00");

    let sun = ephem.heliocentric_3d(Body::Sun, &t).unwrap();
    assert!(sun.iter().all(|c| c.is_zero()));

    let earth = ephem.heliocentric_3d(Body::Earth, &t).unwrap();
    assert_eq!(ephem.geocentric_3d(Body::Sun, &t).unwrap(), -earth);
    assert!(ephem
        .geocentric_3d(Body::Earth, &t)
        .unwrap()
        .iter()
        .all(|c| c.is_zero()));
}

#[test]
fn geocentric_is_heliocentric_minus_earth() {
    let ephem = Ephemeris::new();
    let t = utc("2010-01-01T00:00:00");

    for body in [Body::Mercury, Body::Mars, Body::Uranus, Body::Pluto] {
        let helio = ephem.heliocentric_3d(body, &t).unwrap();
        let earth = ephem.heliocentric_3d(Body::Earth, &t).unwrap();
        assert_eq!(ephem.geocentric_3d(body, &t).unwrap(), helio - earth);
    }
}

#[test]
fn earth_sun_distance_stays_near_one_au() {
    let ephem = Ephemeris::new();
    let distance = norm(
        &ephem
            .heliocentric_3d(Body::Earth, &utc("2010-01-01T00:00:00"))
            .unwrap(),
    )
    .unwrap();
    // early January, close to perihelion
    approx::assert_relative_eq!(f(distance), 0.98331, epsilon = 1e-4);
}
