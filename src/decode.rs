use crate::{wire, ArtImage, ArtSearch, Artwork, Place};

/// Query used when coordinates resolve to no usable place name.
pub(crate) const UNKNOWN_PLACE_QUERY: &str = "world";

pub(crate) fn decode_place(response: wire::ReverseGeocodeResponse) -> Place {
    let name = response
        .address
        .as_ref()
        .and_then(resolve_place_name)
        .unwrap_or_else(|| UNKNOWN_PLACE_QUERY.to_owned());

    Place {
        name,
        display_name: response.display_name,
    }
}

/// Most specific non-empty address component wins: city, then
/// state_district, then country.
fn resolve_place_name(address: &wire::Address) -> Option<String> {
    [&address.city, &address.state_district, &address.country]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

pub(crate) fn decode_art_search(response: wire::CollectionResponse) -> ArtSearch {
    let artworks = response
        .art_objects
        .into_iter()
        .map(decode_artwork)
        .collect();

    ArtSearch {
        count: response.count,
        artworks,
    }
}

fn decode_artwork(object: wire::ArtObject) -> Artwork {
    let image = object.web_image.and_then(|image| {
        let url = image.url?;
        Some(ArtImage {
            url,
            width: image.width,
            height: image.height,
        })
    });

    Artwork {
        object_number: object.object_number,
        title: object.title,
        long_title: object.long_title,
        artist: object.principal_or_first_maker,
        image,
    }
}

#[cfg(test)]
mod tests {
    use crate::{decode, wire};

    fn address(
        city: Option<&str>,
        state_district: Option<&str>,
        country: Option<&str>,
    ) -> wire::Address {
        wire::Address {
            city: city.map(str::to_owned),
            state_district: state_district.map(str::to_owned),
            country: country.map(str::to_owned),
        }
    }

    #[test]
    fn place_prefers_city() {
        let place = decode::decode_place(wire::ReverseGeocodeResponse {
            display_name: Some("Amsterdam, Noord-Holland, Nederland".to_owned()),
            address: Some(address(Some("Amsterdam"), Some("Noord-Holland"), Some("Nederland"))),
        });
        assert_eq!(place.name, "Amsterdam");
        assert_eq!(
            place.display_name.as_deref(),
            Some("Amsterdam, Noord-Holland, Nederland")
        );
    }

    #[test]
    fn place_falls_back_to_state_district_then_country() {
        let place = decode::decode_place(wire::ReverseGeocodeResponse {
            display_name: None,
            address: Some(address(None, Some("Utrecht"), Some("Nederland"))),
        });
        assert_eq!(place.name, "Utrecht");

        let place = decode::decode_place(wire::ReverseGeocodeResponse {
            display_name: None,
            address: Some(address(None, None, Some("Nederland"))),
        });
        assert_eq!(place.name, "Nederland");
    }

    #[test]
    fn place_without_address_resolves_to_world() {
        let place = decode::decode_place(wire::ReverseGeocodeResponse {
            display_name: None,
            address: None,
        });
        assert_eq!(place.name, "world");
    }

    #[test]
    fn blank_address_components_are_skipped() {
        let place = decode::decode_place(wire::ReverseGeocodeResponse {
            display_name: None,
            address: Some(address(Some("  "), None, Some("Brasil"))),
        });
        assert_eq!(place.name, "Brasil");
    }

    #[test]
    fn artwork_without_web_image_decodes_with_no_image() {
        let search = decode::decode_art_search(wire::CollectionResponse {
            count: 1,
            art_objects: vec![wire::ArtObject {
                object_number: "SK-C-5".to_owned(),
                title: Some("De Nachtwacht".to_owned()),
                long_title: None,
                principal_or_first_maker: Some("Rembrandt van Rijn".to_owned()),
                web_image: None,
            }],
        });
        assert_eq!(search.count, 1);
        assert_eq!(search.artworks[0].image, None);
        assert_eq!(search.artworks[0].artist.as_deref(), Some("Rembrandt van Rijn"));
    }

    #[test]
    fn web_image_with_null_url_decodes_with_no_image() {
        let search = decode::decode_art_search(wire::CollectionResponse {
            count: 1,
            art_objects: vec![wire::ArtObject {
                object_number: "SK-A-1".to_owned(),
                title: None,
                long_title: None,
                principal_or_first_maker: None,
                web_image: Some(wire::WebImage {
                    url: None,
                    width: Some(2500),
                    height: Some(2034),
                }),
            }],
        });
        assert_eq!(search.artworks[0].image, None);
    }

    #[test]
    fn web_image_decodes_url_and_dimensions() {
        let search = decode::decode_art_search(wire::CollectionResponse {
            count: 1,
            art_objects: vec![wire::ArtObject {
                object_number: "SK-A-2".to_owned(),
                title: Some("Melkmeisje".to_owned()),
                long_title: Some("Het melkmeisje, Johannes Vermeer, ca. 1660".to_owned()),
                principal_or_first_maker: Some("Johannes Vermeer".to_owned()),
                web_image: Some(wire::WebImage {
                    url: Some("https://images.example/milkmaid.jpg".to_owned()),
                    width: Some(2261),
                    height: Some(2548),
                }),
            }],
        });
        let image = search.artworks[0].image.as_ref().expect("must have image");
        assert_eq!(image.url, "https://images.example/milkmaid.jpg");
        assert_eq!(image.width, Some(2261));
        assert_eq!(image.height, Some(2548));
    }
}
