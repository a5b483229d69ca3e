use common::models::{Hotspot, MapCenter};
use yew::prelude::*;

/// Marker color bucket for a hotspot's incident count.
pub fn intensity_class(count: u64) -> &'static str {
    if count > 150 {
        "bg-red-500"
    } else if count > 100 {
        "bg-red-400"
    } else if count > 50 {
        "bg-orange-500"
    } else if count > 25 {
        "bg-orange-400"
    } else {
        "bg-yellow-500"
    }
}

/// Deterministic overlay position for a hotspot marker, as percentages
/// within the 10..=90 band of the map frame. The embedded map cannot place
/// markers geographically, so the overlay only needs stable spread.
pub fn overlay_position(id: usize) -> (u32, u32) {
    let left = 10 + ((id as u32) * 37) % 80;
    let top = 10 + ((id as u32) * 53 + 17) % 80;
    (left, top)
}

#[derive(Properties, PartialEq)]
pub struct MapVisualizationProps {
    pub center: MapCenter,
    pub hotspots: Vec<Hotspot>,
}

/// Embedded map iframe centered on the data's focal point, with hotspot
/// markers overlaid. Clicking a marker opens a small tooltip card.
#[function_component(MapVisualization)]
pub fn map_visualization(props: &MapVisualizationProps) -> Html {
    let selected = use_state(|| Option::<Hotspot>::None);

    let close_tooltip = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let map_src = format!(
        "https://www.google.com/maps?q={},{}&z=14&output=embed",
        props.center.lat, props.center.lng
    );

    html! {
        <div class="relative w-full h-full">
            <iframe
                width="100%"
                height="100%"
                loading="lazy"
                title="Crime Hotspot Map"
                referrerpolicy="no-referrer-when-downgrade"
                src={map_src}
                class="border-0"
            ></iframe>

            <div class="absolute inset-0 pointer-events-none">
                {for props.hotspots.iter().map(|hotspot| {
                    let (left, top) = overlay_position(hotspot.id);
                    let onclick = {
                        let selected = selected.clone();
                        let hotspot = hotspot.clone();
                        Callback::from(move |_| selected.set(Some(hotspot.clone())))
                    };
                    html! {
                        <div
                            key={hotspot.id}
                            class="absolute transform -translate-x-1/2 -translate-y-1/2 pointer-events-auto"
                            style={format!("left: {left}%; top: {top}%;")}
                            onclick={onclick}
                        >
                            <div class={classes!(
                                intensity_class(hotspot.count),
                                "w-5", "h-5", "rounded-full", "cursor-pointer"
                            )}></div>
                        </div>
                    }
                })}
            </div>

            {if let Some(hotspot) = (*selected).as_ref() {
                html! {
                    <div class="absolute top-4 right-4 bg-white rounded-lg shadow-lg border border-border p-3 z-10 w-64">
                        <div class="flex justify-between items-start">
                            <h4 class="font-medium text-sm text-text-primary">{&hotspot.category}</h4>
                            <button
                                class="text-text-tertiary hover:text-text-primary"
                                onclick={close_tooltip}
                            >
                                {"×"}
                            </button>
                        </div>
                        <p class="text-sm text-text-secondary mt-1">
                            {format!("{} reported incidents", hotspot.count)}
                        </p>
                        <p class="text-xs text-text-tertiary mt-1">
                            {format!("{:.4}, {:.4}", hotspot.lat, hotspot.lng)}
                        </p>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_buckets_match_count_thresholds() {
        assert_eq!(intensity_class(214), "bg-red-500");
        assert_eq!(intensity_class(150), "bg-red-400");
        assert_eq!(intensity_class(87), "bg-orange-500");
        assert_eq!(intensity_class(43), "bg-orange-400");
        assert_eq!(intensity_class(12), "bg-yellow-500");
    }

    #[test]
    fn overlay_positions_stay_inside_the_frame() {
        for id in 0..20 {
            let (left, top) = overlay_position(id);
            assert!((10..=90).contains(&left));
            assert!((10..=90).contains(&top));
        }
    }

    #[test]
    fn overlay_positions_are_stable_and_spread() {
        assert_eq!(overlay_position(1), overlay_position(1));
        assert_ne!(overlay_position(0), overlay_position(1));
        assert_ne!(overlay_position(1), overlay_position(2));
    }
}
