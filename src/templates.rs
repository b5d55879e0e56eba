use maud::{DOCTYPE, Markup, html};

use crate::models::MovieWithDetails;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[MovieWithDetails]) -> String {
    page(
        "Movie Database",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Movie Database" }
                    p class="mt-2 text-gray-600" { "Every movie with its director, cast and reviews." }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for details in movies {
                                (movie_card(details))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn movie_page(details: &MovieWithDetails) -> String {
    let movie_id = details.movie.id;

    page(
        &details.movie.title,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    a class="text-sm text-blue-600 hover:text-blue-800" href="/" { "← All movies" }

                    div class="mt-4 bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (details.movie.title) }
                        p class="mt-2 text-gray-600" {
                            (details.movie.release_year) " · directed by " (details.director.name)
                        }

                        h2 class="mt-8 text-lg font-semibold text-gray-900" { "Cast" }
                        @if details.actors.is_empty() {
                            p class="mt-2 text-gray-500" { "No cast on record." }
                        } @else {
                            ul class="mt-2 space-y-1" {
                                @for actor in &details.actors {
                                    li class="text-gray-700" {
                                        (actor.name) " "
                                        span class="text-gray-400" { "(b. " (actor.birth_year) ")" }
                                    }
                                }
                            }
                        }

                        h2 class="mt-8 text-lg font-semibold text-gray-900" { "Reviews" }
                        @if details.reviews.is_empty() {
                            p class="mt-2 text-gray-500" { "No reviews yet." }
                        } @else {
                            div class="mt-2 space-y-3" {
                                @for review in &details.reviews {
                                    div class="border-l-4 border-yellow-400 pl-4" {
                                        p class="text-yellow-500" { (stars(review.rating)) }
                                        p class="text-gray-700" { (review.comment) }
                                    }
                                }
                            }
                        }

                        form class="mt-8 space-y-4" method="post"
                            action=(format!("/movies/{movie_id}/reviews")) {
                            h2 class="text-lg font-semibold text-gray-900" { "Add a review" }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Rating" }
                                select class="mt-2 rounded-md border border-gray-300 px-3 py-2" name="rating" id="rating" {
                                    @for rating in (1..=5).rev() {
                                        option value=(rating) { (rating) " / 5" }
                                    }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="comment" { "Comment" }
                                textarea class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2" name="comment" id="comment" rows="3" required {}
                            }

                            button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Submit" }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page(movie_id: i64) -> String {
    page(
        "Not found",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Movie not found" }
                        p class="mt-4 text-gray-700" { "No movie with id " (movie_id) " exists." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn movie_card(details: &MovieWithDetails) -> Markup {
    let movie_id = details.movie.id;

    html! {
        div class="bg-white shadow rounded-lg p-6" {
            a class="text-xl font-bold text-gray-900 hover:text-blue-700"
                href=(format!("/movies/{movie_id}")) {
                (details.movie.title)
            }
            p class="mt-1 text-gray-600" {
                (details.movie.release_year) " · " (details.director.name)
            }

            @if !details.actors.is_empty() {
                p class="mt-3 text-sm text-gray-700" {
                    span class="font-semibold" { "Cast: " }
                    ({ details.actors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ") })
                }
            }

            @if !details.reviews.is_empty() {
                div class="mt-3 space-y-1" {
                    @for review in &details.reviews {
                        p class="text-sm text-gray-600" {
                            span class="text-yellow-500" { (stars(review.rating)) }
                            " " (review.comment)
                        }
                    }
                }
            }
        }
    }
}

fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
