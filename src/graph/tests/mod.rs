mod sanity_tests;
