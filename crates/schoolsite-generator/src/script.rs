//! Client behavior script shipped as `script.js`.
//!
//! Plain browser JavaScript with no dependencies. It drives every interactive
//! section of the generated markup:
//!
//! - smooth scrolling for same-document anchors
//! - hero slider autoplay (`data-autoplay`, `data-interval`), hover pause, dot
//!   and arrow navigation
//! - tab switching scoped to one tabs section
//! - single-open accordions
//! - lazy images carrying `data-src`
//! - fade-in once the page has loaded

/// The behavior script.
pub const BEHAVIOR_SCRIPT: &str = r##"(function () {
    'use strict';

    // Smooth scroll for same-document anchors.
    document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
        anchor.addEventListener('click', function (event) {
            var href = anchor.getAttribute('href');
            if (!href || href === '#') {
                return;
            }
            var target = document.getElementById(href.slice(1));
            if (target) {
                event.preventDefault();
                target.scrollIntoView({ behavior: 'smooth' });
            }
        });
    });

    // Hero sliders.
    document.querySelectorAll('.slider').forEach(function (slider) {
        var slides = slider.querySelectorAll('.slide');
        var dots = slider.querySelectorAll('.slider-dot');
        if (slides.length === 0) {
            return;
        }

        var current = 0;
        var timer = null;
        var interval = parseInt(slider.getAttribute('data-interval'), 10) || 5000;
        var autoplay = slider.getAttribute('data-autoplay') !== 'false' && slides.length > 1;

        function show(index) {
            current = (index + slides.length) % slides.length;
            slides.forEach(function (slide, i) {
                slide.classList.toggle('active', i === current);
            });
            dots.forEach(function (dot, i) {
                dot.classList.toggle('active', i === current);
            });
        }

        function stop() {
            if (timer !== null) {
                clearInterval(timer);
                timer = null;
            }
        }

        function start() {
            stop();
            if (autoplay) {
                timer = setInterval(function () {
                    show(current + 1);
                }, interval);
            }
        }

        dots.forEach(function (dot, i) {
            dot.addEventListener('click', function () {
                show(i);
                start();
            });
        });

        var prev = slider.querySelector('.slider-arrow.prev');
        var next = slider.querySelector('.slider-arrow.next');
        if (prev) {
            prev.addEventListener('click', function () {
                show(current - 1);
                start();
            });
        }
        if (next) {
            next.addEventListener('click', function () {
                show(current + 1);
                start();
            });
        }

        slider.addEventListener('mouseenter', stop);
        slider.addEventListener('mouseleave', start);
        start();
    });

    // Tabs, scoped to their own section.
    document.querySelectorAll('.tabs-content').forEach(function (section) {
        var buttons = section.querySelectorAll('.tab-button');
        var panels = section.querySelectorAll('.tab-panel');
        buttons.forEach(function (button) {
            button.addEventListener('click', function () {
                var tab = button.getAttribute('data-tab');
                buttons.forEach(function (b) {
                    b.classList.toggle('active', b === button);
                });
                panels.forEach(function (panel) {
                    panel.classList.toggle('active', panel.getAttribute('data-tab') === tab);
                });
            });
        });
    });

    // Accordions: one open item per section.
    document.querySelectorAll('.accordion').forEach(function (section) {
        var items = section.querySelectorAll('.accordion-item');
        items.forEach(function (item) {
            var header = item.querySelector('.accordion-header');
            if (!header) {
                return;
            }
            header.addEventListener('click', function () {
                var wasOpen = item.classList.contains('active');
                items.forEach(function (other) {
                    other.classList.remove('active');
                });
                if (!wasOpen) {
                    item.classList.add('active');
                }
            });
        });
    });

    // Lazy images.
    function reveal(img) {
        var src = img.getAttribute('data-src');
        if (src) {
            img.setAttribute('src', src);
            img.removeAttribute('data-src');
        }
        img.classList.add('lazy-loaded');
    }

    var lazyImages = document.querySelectorAll('img[data-src]');
    if ('IntersectionObserver' in window) {
        var observer = new IntersectionObserver(function (entries) {
            entries.forEach(function (entry) {
                if (entry.isIntersecting) {
                    reveal(entry.target);
                    observer.unobserve(entry.target);
                }
            });
        }, { rootMargin: '200px 0px' });
        lazyImages.forEach(function (img) {
            observer.observe(img);
        });
    } else {
        lazyImages.forEach(reveal);
    }

    // Fade in.
    if (document.readyState === 'complete') {
        document.body.classList.add('loaded');
    } else {
        window.addEventListener('load', function () {
            document.body.classList.add('loaded');
        });
    }
})();
"##;
