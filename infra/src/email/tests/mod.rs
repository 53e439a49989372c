mod templates_tests;
